// hit testing
//
// the modal backdrop and its content panel are two separate regions; rather
// than leaning on event bubbling, callers classify each click against the
// panel rectangle and hand the result to the controller

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    // edges count as inside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClickRegion {
    Inside,
    Outside,
}

impl ClickRegion {
    // an unmeasurable region never produces an outside click
    pub fn classify(region: Option<Rect>, point: Point) -> Self {
        match region {
            Some(rect) if !rect.contains(point) => ClickRegion::Outside,
            _ => ClickRegion::Inside,
        }
    }

    // inside when any of the regions contains the click target
    pub fn from_regions<R>(
        regions: impl IntoIterator<Item = R>,
        mut contains: impl FnMut(R) -> bool,
    ) -> Self {
        match regions.into_iter().any(|region| contains(region)) {
            true => ClickRegion::Inside,
            false => ClickRegion::Outside,
        }
    }
}
