// src/layout.rs
//
// Force-directed 2D embedding of the teammate graph. Std-only and
// deterministic: seed positions are hashed from the node keys, so the
// same graph always settles into the same shape. The GUI steps this
// live; tests run it headless.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const REPULSION: f32 = 14_000.0;
const SOFTENING: f32 = 450.0;
const SPRING: f32 = 0.02;
const PREFERRED_EDGE_LEN: f32 = 120.0;
const CENTER_PULL: f32 = 0.0012;
const DAMPING: f32 = 0.85;
const MAX_SPEED: f32 = 18.0;

#[derive(Clone, Debug)]
pub struct ForceLayout {
    positions: Vec<[f32; 2]>,
    velocities: Vec<[f32; 2]>,
    edges: Vec<(usize, usize)>,
}

impl ForceLayout {
    /// Seed one position per key, spread on a spiral whose angles come
    /// from hashing the keys. `edges` index into `keys`.
    pub fn seeded<S: AsRef<str>>(keys: &[S], edges: Vec<(usize, usize)>) -> Self {
        let n = keys.len();
        let mut positions = Vec::with_capacity(n);
        for (i, key) in keys.iter().enumerate() {
            let [dx, dy] = stable_direction(key.as_ref());
            let ring = 40.0 + (i as f32).sqrt() * 60.0;
            positions.push([dx * ring, dy * ring]);
        }

        let mut edges = edges
            .into_iter()
            .filter(|&(a, b)| a < n && b < n && a != b)
            .collect::<Vec<_>>();
        edges.sort_unstable();
        edges.dedup();

        Self {
            positions,
            velocities: vec![[0.0, 0.0]; n],
            edges,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, i: usize) -> [f32; 2] {
        self.positions[i]
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Advance the simulation `ticks` steps.
    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// One simulation tick: pairwise repulsion, edge springs, a weak
    /// pull toward the origin, then damped integration.
    pub fn step(&mut self) {
        let n = self.positions.len();
        if n < 2 {
            return;
        }

        let mut forces = vec![[0.0f32; 2]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let dx = self.positions[i][0] - self.positions[j][0];
                let dy = self.positions[i][1] - self.positions[j][1];
                let dist_sq = dx * dx + dy * dy;
                let dist = dist_sq.sqrt();
                let (ux, uy) = if dist > 0.0001 {
                    (dx / dist, dy / dist)
                } else {
                    // coincident points: split on a hashed angle
                    let angle = ((i * 31 + j * 17) as f32) * 0.618_034;
                    (angle.cos(), angle.sin())
                };

                let repulsion = REPULSION / (dist_sq + SOFTENING);
                forces[i][0] += ux * repulsion;
                forces[i][1] += uy * repulsion;
                forces[j][0] -= ux * repulsion;
                forces[j][1] -= uy * repulsion;
            }
        }

        for &(a, b) in &self.edges {
            let dx = self.positions[a][0] - self.positions[b][0];
            let dy = self.positions[a][1] - self.positions[b][1];
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= 0.0001 {
                continue;
            }
            let pull = (dist - PREFERRED_EDGE_LEN) * SPRING;
            let (ux, uy) = (dx / dist, dy / dist);
            forces[a][0] -= ux * pull;
            forces[a][1] -= uy * pull;
            forces[b][0] += ux * pull;
            forces[b][1] += uy * pull;
        }

        for i in 0..n {
            forces[i][0] -= self.positions[i][0] * CENTER_PULL;
            forces[i][1] -= self.positions[i][1] * CENTER_PULL;

            let mut vx = (self.velocities[i][0] + forces[i][0] * 0.05) * DAMPING;
            let mut vy = (self.velocities[i][1] + forces[i][1] * 0.05) * DAMPING;
            let speed = (vx * vx + vy * vy).sqrt();
            if speed > MAX_SPEED {
                vx = vx / speed * MAX_SPEED;
                vy = vy / speed * MAX_SPEED;
            }

            self.velocities[i] = [vx, vy];
            self.positions[i][0] += vx;
            self.positions[i][1] += vy;
        }
    }
}

fn stable_direction(key: &str) -> [f32; 2] {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    let h = hasher.finish();
    let angle = (h % 10_000) as f32 / 10_000.0 * std::f32::consts::TAU;
    [angle.cos(), angle.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: [f32; 2], b: [f32; 2]) -> f32 {
        let dx = a[0] - b[0];
        let dy = a[1] - b[1];
        (dx * dx + dy * dy).sqrt()
    }

    #[test]
    fn connected_nodes_settle_closer_than_strangers() {
        let keys = ["id:a", "id:b", "id:c"];
        let mut layout = ForceLayout::seeded(&keys, vec![(0, 1)]);
        layout.run(400);
        let ab = dist(layout.position(0), layout.position(1));
        let ac = dist(layout.position(0), layout.position(2));
        assert!(ab < ac, "edge should pull a and b together (ab={ab}, ac={ac})");
    }

    #[test]
    fn layout_is_deterministic_for_same_input() {
        let keys = ["id:a", "id:b", "id:c", "id:d"];
        let edges = vec![(0, 1), (1, 2), (2, 3)];
        let mut first = ForceLayout::seeded(&keys, edges.clone());
        let mut second = ForceLayout::seeded(&keys, edges);
        first.run(100);
        second.run(100);
        for i in 0..first.len() {
            assert_eq!(first.position(i), second.position(i));
        }
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        let mut empty = ForceLayout::seeded::<&str>(&[], Vec::new());
        empty.run(10);
        assert!(empty.is_empty());

        let mut single = ForceLayout::seeded(&["only"], vec![(0, 0)]);
        single.run(10);
        assert_eq!(single.len(), 1);
        assert!(single.edges().is_empty());
    }
}
