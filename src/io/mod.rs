pub mod exr_utils;
