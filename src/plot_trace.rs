use ggez::glam::Vec2;

/// Curve points computed so far, kept so the curve can be drawn without evaluating it again.
///
/// Storage is allocated once; `record` past the capacity is ignored.
pub struct PlotTrace {
    points: Vec<Option<Vec2>>,
    len: usize,
}

impl PlotTrace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: vec![None; capacity], len: 0 }
    }

    pub fn record(&mut self, point: Vec2) {
        if let Some(slot) = self.points.get_mut(self.len) {
            *slot = Some(point);
            self.len += 1;
        }
    }

    pub fn clear(&mut self) {
        self.points.iter_mut().for_each(|p| *p = None);
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    pub fn entries(&self) -> &[Option<Vec2>] {
        &self.points
    }

    /// Consecutive pairs of recorded points; a pair is skipped as soon as one end is unset.
    pub fn segments(&self) -> impl Iterator<Item = [Vec2; 2]> + '_ {
        self.points.windows(2).filter_map(|w| match (w[0], w[1]) {
            (Some(a), Some(b)) => Some([a, b]),
            _ => None,
        })
    }
}
