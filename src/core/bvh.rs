// Copyright @yucwang 2026

use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

use std::cmp::Ordering;

const MAX_LEAF_SIZE: usize = 2;

enum BVHNode {
    Leaf { bounds: AABB, first: usize, count: usize },
    Interior { bounds: AABB, children: (usize, usize), axis: usize },
}

impl BVHNode {
    fn bounds(&self) -> &AABB {
        match self {
            BVHNode::Leaf { bounds, .. } => bounds,
            BVHNode::Interior { bounds, .. } => bounds,
        }
    }
}

/// Hierarchy over the bounding boxes of scene instances. Scenes hold few
/// instances, so nodes are split at the median centroid along the widest
/// axis rather than by surface area cost.
pub struct BVH {
    nodes: Vec<BVHNode>,
    order: Vec<usize>,
}

impl BVH {
    pub fn new(bounds: &[AABB], centroids: &[Vector3f]) -> Self {
        debug_assert_eq!(bounds.len(), centroids.len());
        let count = bounds.len();
        let mut bvh = Self {
            nodes: Vec::with_capacity(2 * count),
            order: (0..count).collect(),
        };
        if count > 0 {
            bvh.build(bounds, centroids, 0, count);
        }
        bvh
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Front to back traversal. `visit` tests one primitive and returns the
    /// new closest distance when it accepted a hit; nodes the ray enters
    /// beyond the closest distance so far are skipped.
    pub fn traverse<F>(&self, ray: &Ray3f, mut visit: F) -> bool
    where
        F: FnMut(usize) -> Option<Float>,
    {
        if self.nodes.is_empty() {
            return false;
        }

        let mut closest = ray.max_t;
        let mut hit = false;
        let mut stack = vec![0usize];
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx];
            if node.bounds().ray_entry(ray, closest).is_none() {
                continue;
            }

            match node {
                BVHNode::Leaf { first, count, .. } => {
                    for &primitive in &self.order[*first..*first + *count] {
                        if let Some(t) = visit(primitive) {
                            closest = closest.min(t);
                            hit = true;
                        }
                    }
                }
                BVHNode::Interior { children: (low, high), axis, .. } => {
                    // the near child goes on top
                    if ray.dir()[*axis] < 0.0 {
                        stack.push(*low);
                        stack.push(*high);
                    } else {
                        stack.push(*high);
                        stack.push(*low);
                    }
                }
            }
        }

        hit
    }

    fn build(&mut self, bounds: &[AABB], centroids: &[Vector3f], first: usize, end: usize) -> usize {
        let mut node_bounds = AABB::default();
        let mut centroid_bounds = AABB::default();
        for &primitive in &self.order[first..end] {
            node_bounds.expand_by_aabb(&bounds[primitive]);
            centroid_bounds.expand_by_point(&centroids[primitive]);
        }

        let node_idx = self.nodes.len();
        let count = end - first;
        let axis = centroid_bounds.max_extent() as usize;
        let spread = centroid_bounds.p_max[axis] - centroid_bounds.p_min[axis];
        self.nodes.push(BVHNode::Leaf { bounds: node_bounds, first, count });
        if count <= MAX_LEAF_SIZE || !(spread > 0.0) {
            return node_idx;
        }

        let half = count / 2;
        self.order[first..end].select_nth_unstable_by(half, |a, b| {
            centroids[*a][axis].partial_cmp(&centroids[*b][axis]).unwrap_or(Ordering::Equal)
        });
        let low = self.build(bounds, centroids, first, first + half);
        let high = self.build(bounds, centroids, first + half, end);
        self.nodes[node_idx] = BVHNode::Interior { bounds: node_bounds, children: (low, high), axis };
        node_idx
    }
}

#[cfg(test)]
mod tests {
    use super::BVH;
    use crate::math::aabb::AABB;
    use crate::math::constants::{Float, Vector3f};
    use crate::math::ray::Ray3f;

    fn boxes_along_x(count: usize) -> Vec<AABB> {
        (0..count)
            .map(|i| {
                let x = i as Float * 2.0;
                AABB::new(Vector3f::new(x, 0.0, 0.0), Vector3f::new(x + 0.5, 0.5, 0.5))
            })
            .collect()
    }

    fn centroids(boxes: &[AABB]) -> Vec<Vector3f> {
        boxes.iter().map(|b| b.center()).collect()
    }

    #[test]
    fn test_bvh_finds_every_box() {
        let boxes = boxes_along_x(16);
        let bvh = BVH::new(&boxes, &centroids(&boxes));

        for (i, b) in boxes.iter().enumerate() {
            let origin = Vector3f::new(b.center().x, 0.25, 2.0);
            let ray = Ray3f::new(origin, Vector3f::new(0.0, 0.0, -1.0), None, None);
            let mut visited = Vec::new();
            let hit = bvh.traverse(&ray, |index| {
                visited.push(index);
                if index == i { Some(1.5) } else { None }
            });
            assert!(hit);
            // neighbours sharing a leaf are tested too, nothing further
            assert!(visited.contains(&i), "BVH skipped primitive {}", i);
            assert!(visited.len() <= super::MAX_LEAF_SIZE);
        }

        let miss = Ray3f::new(Vector3f::new(100.0, 100.0, 1.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(!bvh.traverse(&miss, |_| Some(1.0)));
    }

    #[test]
    fn test_bvh_skips_nodes_behind_closest_hit() {
        // eight unit boxes stacked along -z, the ray enters box i at 4.5 + 2i
        let boxes: Vec<AABB> = (0..8)
            .map(|i| {
                let z = -2.0 * i as Float;
                AABB::new(Vector3f::new(-0.5, -0.5, z - 0.5), Vector3f::new(0.5, 0.5, z + 0.5))
            })
            .collect();
        let bvh = BVH::new(&boxes, &centroids(&boxes));
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, -1.0), None, None);

        let mut visited = Vec::new();
        assert!(bvh.traverse(&ray, |index| {
            visited.push(index);
            Some(4.5 + 2.0 * index as Float)
        }));
        visited.sort();
        assert_eq!(visited, vec![0, 1]);
    }

    #[test]
    fn test_empty_bvh() {
        let bvh = BVH::new(&[], &[]);
        assert!(bvh.is_empty());
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0), None, None);
        assert!(!bvh.traverse(&ray, |_| Some(1.0)));
    }
}
