// src/surface/recording.rs
// A surface that records every call as plain data. Used by the test
// suite to assert on emitted call sequences, and handy for debugging a
// style without producing an artifact.

use crate::error::SurfaceError;
use crate::style::{Gradient, Rgb};

use super::{Region, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Begin {
        size: f64,
        background: Rgb,
    },
    Scale(f64),
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate {
        degrees: f64,
        pivot: (f64, f64),
    },
    PushState,
    PopState,
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        x_axis_angle: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    ClosePath,
    Fill(Rgb),
    Finish,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    /// When set, `arc_to` is refused with a capability error, emulating
    /// a backend without elliptic-arc support.
    pub reject_arcs: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_arc_support() -> Self {
        Self {
            calls: Vec::new(),
            reject_arcs: true,
        }
    }

    /// The solid fill calls, in emission order.
    pub fn fills(&self) -> Vec<Rgb> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Fill(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }
}

impl Surface for RecordingSurface {
    fn begin(&mut self, size: f64, background: Rgb) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::Begin { size, background });
        Ok(())
    }

    fn scale(&mut self, factor: f64) {
        self.calls.push(SurfaceCall::Scale(factor));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.calls.push(SurfaceCall::Translate { dx, dy });
    }

    fn rotate(&mut self, degrees: f64, pivot_x: f64, pivot_y: f64) {
        self.calls.push(SurfaceCall::Rotate {
            degrees,
            pivot: (pivot_x, pivot_y),
        });
    }

    fn push_state(&mut self) {
        self.calls.push(SurfaceCall::PushState);
    }

    fn pop_state(&mut self) {
        self.calls.push(SurfaceCall::PopState);
    }

    fn begin_path(&mut self) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::MoveTo { x, y });
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::LineTo { x, y });
        Ok(())
    }

    fn curve_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        });
        Ok(())
    }

    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        x_axis_angle: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Result<(), SurfaceError> {
        if self.reject_arcs {
            return Err(SurfaceError::Unsupported("elliptic arcs"));
        }
        self.calls.push(SurfaceCall::ArcTo {
            rx,
            ry,
            x_axis_angle,
            large_arc,
            sweep,
            x,
            y,
        });
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::ClosePath);
        Ok(())
    }

    fn fill(&mut self, color: Rgb) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::Fill(color));
        Ok(())
    }

    fn fill_gradient(&mut self, _gradient: &Gradient, _region: Region) -> Result<(), SurfaceError> {
        Err(SurfaceError::Unsupported("gradient fills"))
    }

    fn finish(&mut self) -> Result<Vec<u8>, SurfaceError> {
        self.calls.push(SurfaceCall::Finish);
        Ok(Vec::new())
    }
}
