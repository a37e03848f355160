// Copyright @yucwang 2026

use crate::core::error::{RenderError, Result};
use crate::core::integrator::Integrator;
use crate::integrators::direct::DirectIntegrator;
use crate::integrators::path::PathtracerIntegrator;

use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IntegratorKind {
    Direct,
    Pathtracer,
}

impl FromStr for IntegratorKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "direct" => Ok(IntegratorKind::Direct),
            "pathtracer" => Ok(IntegratorKind::Pathtracer),
            other => Err(RenderError::InvalidArgument(
                format!("unknown integrator '{}', expected 'direct' or 'pathtracer'", other))),
        }
    }
}

/// Everything the command line controls.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub output: PathBuf,
    pub integrator: IntegratorKind,
    pub spp: u32,
    pub max_depth: u32,
    pub seed: u64,
    pub width: usize,
    pub height: usize,
}

impl RenderSettings {
    pub fn new(output: PathBuf) -> Self {
        Self {
            output,
            integrator: IntegratorKind::Pathtracer,
            spp: 16,
            max_depth: 2,
            seed: 0,
            width: 256,
            height: 256,
        }
    }

    pub fn usage(program: &str) -> String {
        format!("Usage: {} <output.exr> [--integrator direct|pathtracer] [--spp N] \
                 [--max-depth N] [--seed N] [--width N] [--height N]", program)
    }

    /// `args` excludes the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let output = match args.first() {
            Some(path) if !path.starts_with("--") => PathBuf::from(path),
            _ => return Err(RenderError::InvalidArgument(String::from("missing output path"))),
        };
        let mut settings = Self::new(output);

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = args.get(i + 1).ok_or_else(|| {
                RenderError::InvalidArgument(format!("missing value for {}", flag))
            })?;
            match flag {
                "--integrator" => settings.integrator = value.parse()?,
                "--spp" => settings.spp = parse_positive(flag, value)?,
                "--max-depth" => settings.max_depth = parse_positive(flag, value)?,
                "--seed" => settings.seed = parse_number(flag, value)?,
                "--width" => settings.width = parse_positive(flag, value)?,
                "--height" => settings.height = parse_positive(flag, value)?,
                _ => return Err(RenderError::InvalidArgument(format!("unknown option {}", flag))),
            }
            i += 2;
        }

        Ok(settings)
    }

    pub fn build_integrator(&self) -> Box<dyn Integrator> {
        match self.integrator {
            IntegratorKind::Direct => Box::new(DirectIntegrator::new()),
            IntegratorKind::Pathtracer => Box::new(PathtracerIntegrator::new(self.max_depth)),
        }
    }
}

fn parse_number<T: FromStr>(flag: &str, value: &str) -> Result<T> {
    value.parse::<T>().map_err(|_| {
        RenderError::InvalidArgument(format!("{} expects a number, got '{}'", flag, value))
    })
}

fn parse_positive<T: FromStr + PartialOrd + Default>(flag: &str, value: &str) -> Result<T> {
    let parsed: T = parse_number(flag, value)?;
    if parsed <= T::default() {
        return Err(RenderError::InvalidArgument(format!("{} must be positive, got '{}'", flag, value)));
    }
    Ok(parsed)
}
