// File: crates/tipline-core/src/session.rs
// Summary: Per-chart hover engine: pointer handlers, idle timer and the current overlay layout.
// Notes:
// - One engine per mounted chart. The idle timer is instance state; callers pass event
//   timestamps in and ask `next_deadline()` when to call `poll` again.
// - Single-threaded by construction (`&mut self` handlers, no shared state).

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::TipsConfig;
use crate::error::{Result, TipsError};
use crate::geometry::{ChartGeometry, Point};
use crate::label::DateFormatter;
use crate::layout::{compose, ApproxMeasure, LayoutContext, OverlayLayout, TextMeasure};
use crate::locate::locate;
use crate::scale::{XScale, YScale};
use crate::series::ChartData;
use crate::stack::stack_layout;
use crate::variant::{ChartKind, TipPolicy};

/// Pointer input from the hit region. Coordinates are band-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter,
    Move { x: f32, y: f32 },
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Active,
}

/// What a surface should show right now.
#[derive(Clone, Copy, Debug)]
pub struct OverlayFrame<'a> {
    pub visible: bool,
    pub layout: Option<&'a OverlayLayout>,
}

pub struct HoverEngine<X, Y> {
    kind: ChartKind,
    policy: Option<TipPolicy>,
    data: ChartData,
    x_scale: X,
    y_scale: Y,
    geometry: ChartGeometry,
    config: TipsConfig,
    dates: DateFormatter,
    measure: Box<dyn TextMeasure>,
    state: HoverState,
    deadline: Option<Instant>,
    layout: Option<OverlayLayout>,
}

impl<X: XScale, Y: YScale> HoverEngine<X, Y> {
    /// Create the engine for one chart.
    ///
    /// Stacked kinds accept either a validated stack or a table, which is stacked with the
    /// kind's offset. Unstacked kinds need a table.
    pub fn mount(
        kind: ChartKind,
        data: ChartData,
        x_scale: X,
        y_scale: Y,
        geometry: ChartGeometry,
        config: TipsConfig,
    ) -> Result<Self> {
        config.validate()?;
        // Data shape follows the kind even when tips are switched off.
        let shape = kind.policy();
        let data = match (shape.and_then(|p| p.stacked), data) {
            (Some(offset), ChartData::Unstacked(table)) => ChartData::Stacked(stack_layout(&table, offset)?),
            (None, ChartData::Stacked(_)) if shape.is_some() => {
                return Err(TipsError::DataShape { kind: kind.name(), expected: "unstacked" });
            }
            (_, data) => data,
        };
        let policy = shape.filter(|_| config.enabled);
        debug!(
            kind = kind.name(),
            stacked = data.is_stacked(),
            enabled = config.enabled,
            interactive = policy.is_some(),
            "mount hover engine"
        );
        Ok(Self {
            kind,
            policy,
            data,
            dates: config.date_formatter(),
            x_scale,
            y_scale,
            geometry,
            config,
            measure: Box::new(ApproxMeasure::default()),
            state: HoverState::Idle,
            deadline: None,
            layout: None,
        })
    }

    /// Replace the text measurement used for box sizing.
    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    pub fn kind(&self) -> ChartKind { self.kind }
    pub fn state(&self) -> HoverState { self.state }
    pub fn data(&self) -> &ChartData { &self.data }
    pub fn geometry(&self) -> &ChartGeometry { &self.geometry }
    pub fn config(&self) -> &TipsConfig { &self.config }
    pub fn x_scale(&self) -> &X { &self.x_scale }
    pub fn y_scale(&self) -> &Y { &self.y_scale }
    pub fn is_interactive(&self) -> bool { self.policy.is_some() }

    /// When `poll` should run next, if the idle timer is armed.
    pub fn next_deadline(&self) -> Option<Instant> { self.deadline }

    pub fn frame(&self) -> OverlayFrame<'_> {
        OverlayFrame { visible: self.state == HoverState::Active, layout: self.layout.as_ref() }
    }

    pub fn handle_event(&mut self, evt: PointerEvent, at: Instant) {
        match evt {
            PointerEvent::Enter => self.pointer_enter(at),
            PointerEvent::Move { x, y } => self.pointer_move(Point::new(x, y), at),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    pub fn pointer_enter(&mut self, at: Instant) {
        if self.policy.is_none() {
            return;
        }
        self.show(at);
    }

    /// Show the overlay, re-arm the idle timer and refresh the layout for `cursor`
    /// (band-local). A row rejected by the missing-value check leaves the previous layout
    /// in place. A cursor outside the hit region is ignored.
    pub fn pointer_move(&mut self, cursor: Point, at: Instant) {
        let Some(policy) = self.policy else { return };
        let g = &self.geometry;
        if !g.hit_region().contains(Point::new(g.anchor_x(cursor.x), cursor.y)) {
            trace!(x = cursor.x, y = cursor.y, "move outside hit region");
            return;
        }
        self.show(at);
        let Some(located) = locate(&self.data, &self.x_scale, cursor.x) else { return };
        let ctx = LayoutContext {
            geometry: &self.geometry,
            x_scale: &self.x_scale,
            y_scale: &self.y_scale,
            policy,
            axis: &self.config.y_axis,
            format: &self.config.y_axis.format,
            dates: &self.dates,
            missing_text: &self.config.missing_text,
            measure: self.measure.as_ref(),
        };
        match compose(&located, cursor, &ctx) {
            Some(layout) => {
                trace!(index = located.index, key = located.key, "overlay refreshed");
                self.layout = Some(layout);
            }
            None => trace!(index = located.index, "overlay update suppressed"),
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.policy.is_none() {
            return;
        }
        self.deadline = None;
        self.hide("leave");
    }

    /// Expire the idle timer. Returns true when this call hid the overlay.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.hide("idle")
            }
            _ => false,
        }
    }

    /// Release the overlay state on chart unmount.
    pub fn teardown(self) {
        debug!(kind = self.kind.name(), "teardown hover engine");
    }

    fn show(&mut self, at: Instant) {
        if self.state == HoverState::Idle {
            debug!("hover active");
        }
        self.state = HoverState::Active;
        self.deadline = Some(at + self.idle_timeout());
    }

    fn hide(&mut self, reason: &'static str) -> bool {
        let was_active = self.state == HoverState::Active;
        if was_active {
            debug!(reason, "hover idle");
        }
        self.state = HoverState::Idle;
        was_active
    }

    fn idle_timeout(&self) -> Duration { self.config.idle_timeout() }
}
