// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::{Span, trace, trace_span};
use vello::Scene;
use vello::kurbo::{Affine, Rect, Size};
use vello::peniko::Color;

use beacon_core::timers::TimerId;

use crate::core::{PaintCtx, UpdateCtx, Widget, WidgetId, WidgetMut, WindowModality};
use crate::theme;
use crate::util::{Duration, debug_panic, fill};

/// Default minimum trail opacity, in percent.
///
/// Kept at π for compatibility with existing hosts, which amounts to an
/// almost fully faded trail end.
pub const DEFAULT_MIN_TRAIL_OPACITY: f64 = PI;

/// Default rotation speed, in revolutions per second.
pub const DEFAULT_REVS_PER_SECOND: f64 = FRAC_PI_2;

/// An animated busy indicator.
///
/// The spinner is a ring of `line_count` rounded line segments whose
/// opacities fade with their distance behind a rotating head. A repeating
/// timer advances the head by one line per tick; the widget is hidden while
/// idle and only paints between [`start`] and [`stop`].
///
/// The widget sizes itself from its geometry and ignores host resizes.
///
/// [`start`]: Self::start
/// [`stop`]: Self::stop
pub struct WaitingSpinner {
    color: Color,
    roundness: f64,
    min_trail_opacity: f64,
    trail_fade_pct: f64,
    revs_per_second: f64,
    line_count: u32,
    line_length: f64,
    line_width: f64,
    inner_radius: f64,

    centered: bool,
    disable_host: bool,
    modality: WindowModality,

    /// Index of the line currently at the head of the trail.
    phase: u32,
    spinning: bool,
    timer: Option<TimerId>,
}

// --- MARK: BUILDERS
impl WaitingSpinner {
    /// Create a new idle `WaitingSpinner` with the default geometry.
    pub fn new() -> Self {
        Self {
            color: theme::DEFAULT_SPINNER_COLOR,
            roundness: 100.0,
            min_trail_opacity: DEFAULT_MIN_TRAIL_OPACITY,
            trail_fade_pct: 80.0,
            revs_per_second: DEFAULT_REVS_PER_SECOND,
            line_count: 20,
            line_length: 10.0,
            line_width: 2.0,
            inner_radius: 10.0,
            centered: true,
            disable_host: false,
            modality: WindowModality::default(),
            phase: 0,
            spinning: false,
            timer: None,
        }
    }

    /// Builder-style method to set the line color.
    ///
    /// The color's own alpha is the opacity of the trail head; the rest of
    /// the trail fades from it.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder-style method to set whether the spinner re-centers itself in
    /// the host on every start. Defaults to true.
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Builder-style method to make the spinner disable host input while it
    /// spins. Defaults to false.
    pub fn with_host_disabled(mut self, disable_host: bool) -> Self {
        self.disable_host = disable_host;
        self
    }

    /// Builder-style method to set the modality hint forwarded to the host.
    pub fn with_modality(mut self, modality: WindowModality) -> Self {
        self.modality = modality;
        self
    }

    /// The line color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The number of lines in the ring.
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// Whether the spinner is currently animating.
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// The index of the line currently at the head of the trail.
    pub fn phase(&self) -> u32 {
        self.phase
    }

    /// The length of each line, in layout units.
    pub fn line_length(&self) -> f64 {
        self.line_length
    }

    /// The width of each line, in layout units.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// The radius of the empty center, in layout units.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// The corner roundness of each line, in percent.
    pub fn roundness(&self) -> f64 {
        self.roundness
    }

    /// The opacity floor of the trail, in percent.
    pub fn min_trail_opacity(&self) -> f64 {
        self.min_trail_opacity
    }

    /// The portion of the ring the trail fades over, in percent.
    pub fn trail_fade_pct(&self) -> f64 {
        self.trail_fade_pct
    }

    /// The rotation speed, in revolutions per second.
    pub fn revs_per_second(&self) -> f64 {
        self.revs_per_second
    }

    /// Whether the spinner re-centers itself in the host on start.
    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// Whether the spinner disables host input while it spins.
    pub fn disables_host(&self) -> bool {
        self.disable_host
    }

    /// The modality hint forwarded to the host.
    pub fn modality(&self) -> WindowModality {
        self.modality
    }
}

impl Default for WaitingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

// --- MARK: GEOMETRY
impl WaitingSpinner {
    /// The fixed square footprint implied by the ring geometry.
    fn footprint(&self) -> Size {
        let side = ((self.inner_radius + self.line_length) * 2.0).round();
        Size::new(side, side)
    }

    /// Time between animation steps. One full revolution takes
    /// `line_count` ticks.
    ///
    /// Never shorter than 1ms: a zero-period repeating timer would come due
    /// again the instant it is re-armed.
    fn tick_interval(&self) -> Duration {
        let millis = 1000.0 / (f64::from(self.line_count) * self.revs_per_second);
        Duration::from_millis((millis as u64).max(1))
    }

    fn update_size(this: &mut WidgetMut<'_, Self>) {
        this.ctx.set_fixed_size(this.widget.footprint());
    }

    /// Re-arm (or disarm) the animation timer after a change to the
    /// spinning state or the tick interval.
    fn update_timer(this: &mut WidgetMut<'_, Self>) {
        if let Some(token) = this.widget.timer.take() {
            this.ctx.cancel_timer(token);
        }
        if this.widget.spinning {
            let token = this.ctx.request_timer(this.widget.tick_interval());
            this.widget.timer = Some(token);
        }
    }
}

/// Distance of `line` behind the trail head, in lines.
///
/// The head itself is at distance zero; the line started most recently
/// before it is at distance one, and so on around the ring.
pub fn line_trail_pos(line: u32, phase: u32, line_count: u32) -> u32 {
    let distance = (i64::from(phase) - i64::from(line)).rem_euclid(i64::from(line_count));
    distance as u32
}

/// Opacity of a line at `trail_pos`, in `0.0..=max_alpha`.
///
/// The head is painted at `max_alpha` and the trail fades linearly over the
/// first `trail_fade_pct` percent of the ring; everything behind that sits
/// at the floor of `min_trail_opacity` percent. A floor above `max_alpha`
/// wins over it.
pub fn line_alpha(
    trail_pos: u32,
    line_count: u32,
    trail_fade_pct: f64,
    min_trail_opacity: f64,
    max_alpha: f64,
) -> f64 {
    let min_alpha = min_trail_opacity / 100.0;
    let fade_len = (f64::from(line_count - 1) * trail_fade_pct / 100.0).ceil();
    if f64::from(trail_pos) > fade_len {
        return min_alpha;
    }
    let gradient = (max_alpha - min_alpha) / (fade_len + 1.0);
    // Not `f64::clamp`: a translucent color can put the floor above the
    // head alpha, and the bounds must not panic when they cross.
    (max_alpha - gradient * f64::from(trail_pos))
        .min(max_alpha)
        .max(min_alpha)
}

// --- MARK: WIDGETMUT
impl WaitingSpinner {
    /// Start the animation.
    ///
    /// Shows the widget, resets the animation to its first frame and arms
    /// the timer. Does nothing if the spinner is already spinning.
    pub fn start(this: &mut WidgetMut<'_, Self>) {
        if this.widget.spinning {
            return;
        }
        trace!("WaitingSpinner started");
        if this.widget.centered
            && let Some(host_size) = this.ctx.host_size()
        {
            let size = this.ctx.size();
            this.ctx.set_origin(
                (
                    (host_size.width - size.width) / 2.0,
                    (host_size.height - size.height) / 2.0,
                )
                    .into(),
            );
        }
        if this.widget.disable_host {
            this.ctx.set_host_enabled(false);
        }
        this.widget.phase = 0;
        this.widget.spinning = true;
        Self::update_timer(this);
        this.ctx.set_visible(true);
    }

    /// Stop the animation.
    ///
    /// Hides the widget, disarms the timer and restores host input. The
    /// animation phase is left as-is. Does nothing if the spinner is idle.
    pub fn stop(this: &mut WidgetMut<'_, Self>) {
        if !this.widget.spinning {
            return;
        }
        trace!("WaitingSpinner stopped");
        if this.widget.disable_host {
            this.ctx.set_host_enabled(true);
        }
        this.widget.spinning = false;
        Self::update_timer(this);
        this.ctx.set_visible(false);
    }

    /// Set the number of lines in the ring. Resets the animation phase.
    pub fn set_line_count(this: &mut WidgetMut<'_, Self>, line_count: u32) {
        if line_count == 0 {
            debug_panic!("set_line_count: line_count must be positive");
            return;
        }
        this.widget.line_count = line_count;
        this.widget.phase = 0;
        Self::update_timer(this);
        this.ctx.request_paint();
    }

    /// Set the length of each line, in layout units.
    pub fn set_line_length(this: &mut WidgetMut<'_, Self>, line_length: f64) {
        this.widget.line_length = line_length;
        Self::update_size(this);
    }

    /// Set the width of each line, in layout units.
    pub fn set_line_width(this: &mut WidgetMut<'_, Self>, line_width: f64) {
        this.widget.line_width = line_width;
        Self::update_size(this);
    }

    /// Set the radius of the empty center, in layout units.
    pub fn set_inner_radius(this: &mut WidgetMut<'_, Self>, inner_radius: f64) {
        this.widget.inner_radius = inner_radius;
        Self::update_size(this);
    }

    /// Set the corner roundness of each line, in percent of a full
    /// semicircle. Clamped to `0.0..=100.0`.
    pub fn set_roundness(this: &mut WidgetMut<'_, Self>, roundness: f64) {
        this.widget.roundness = roundness.clamp(0.0, 100.0);
        this.ctx.request_paint();
    }

    /// Set the opacity floor of the trail, in percent.
    pub fn set_min_trail_opacity(this: &mut WidgetMut<'_, Self>, min_trail_opacity: f64) {
        this.widget.min_trail_opacity = min_trail_opacity;
        this.ctx.request_paint();
    }

    /// Set the portion of the ring the trail fades over, in percent.
    pub fn set_trail_fade_pct(this: &mut WidgetMut<'_, Self>, trail_fade_pct: f64) {
        this.widget.trail_fade_pct = trail_fade_pct;
        this.ctx.request_paint();
    }

    /// Set the rotation speed, in revolutions per second.
    pub fn set_revs_per_second(this: &mut WidgetMut<'_, Self>, revs_per_second: f64) {
        if !revs_per_second.is_finite() || revs_per_second <= 0.0 {
            debug_panic!("set_revs_per_second: speed must be positive");
            return;
        }
        this.widget.revs_per_second = revs_per_second;
        Self::update_timer(this);
    }

    /// Set the line color.
    pub fn set_color(this: &mut WidgetMut<'_, Self>, color: Color) {
        this.widget.color = color;
        this.ctx.request_paint();
    }
}

// --- MARK: IMPL WIDGET
impl Widget for WaitingSpinner {
    fn on_added(&mut self, ctx: &mut UpdateCtx<'_>) {
        ctx.set_fixed_size(self.footprint());
        ctx.set_host_modality(self.modality);
        // Idle spinners are invisible until started.
        ctx.set_visible(false);
    }

    fn on_timer(&mut self, ctx: &mut UpdateCtx<'_>, token: TimerId) {
        if self.timer != Some(token) {
            // A tick from a timer that was cancelled this frame.
            return;
        }
        self.phase = (self.phase + 1) % self.line_count;
        ctx.request_paint();
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, scene: &mut Scene) {
        let size = ctx.size();
        let center = size.width.min(size.height) / 2.0;
        let max_alpha = f64::from(self.color.components[3]);
        let corner_radius =
            self.roundness / 100.0 * self.line_length.min(self.line_width) / 2.0;

        let segment = Rect::new(
            0.0,
            -self.line_width / 2.0,
            self.line_length,
            self.line_width / 2.0,
        )
        .to_rounded_rect(corner_radius);

        for line in 0..self.line_count {
            let angle = 360.0 * f64::from(line) / f64::from(self.line_count);
            let transform = Affine::translate((center, center))
                * Affine::rotate(angle.to_radians())
                * Affine::translate((self.inner_radius, 0.0));

            let trail_pos = line_trail_pos(line, self.phase, self.line_count);
            let alpha = line_alpha(
                trail_pos,
                self.line_count,
                self.trail_fade_pct,
                self.min_trail_opacity,
                max_alpha,
            );
            fill(scene, &segment, transform, self.color.with_alpha(alpha as f32));
        }
    }

    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("WaitingSpinner", id = id.trace())
    }

    fn get_debug_text(&self) -> Option<String> {
        if self.spinning {
            Some(format!("[spinning: {}/{}]", self.phase, self.line_count))
        } else {
            Some("[idle]".to_string())
        }
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use beacon_testing::TestHarness;
    use float_cmp::assert_approx_eq;
    use vello::kurbo::{Point, Size};

    use super::*;

    #[test]
    fn defaults() {
        let spinner = WaitingSpinner::new();
        assert_eq!(spinner.line_count(), 20);
        assert_eq!(spinner.line_length(), 10.0);
        assert_eq!(spinner.line_width(), 2.0);
        assert_eq!(spinner.inner_radius(), 10.0);
        assert_eq!(spinner.roundness(), 100.0);
        assert_eq!(spinner.min_trail_opacity(), DEFAULT_MIN_TRAIL_OPACITY);
        assert_eq!(spinner.trail_fade_pct(), 80.0);
        assert_eq!(spinner.revs_per_second(), DEFAULT_REVS_PER_SECOND);
        assert_eq!(spinner.color(), theme::DEFAULT_SPINNER_COLOR);
        assert!(spinner.is_centered());
        assert!(!spinner.disables_host());
        assert_eq!(spinner.modality(), WindowModality::NonModal);
        assert!(!spinner.is_spinning());
        assert_eq!(spinner.footprint(), Size::new(40.0, 40.0));
        // 1000 / (20 * π/2), truncated to whole milliseconds.
        assert_eq!(spinner.tick_interval(), Duration::from_millis(31));
    }

    #[test]
    fn roundness_is_clamped() {
        let mut harness = TestHarness::create(WaitingSpinner::new());
        for (requested, stored) in [
            (-0.1, 0.0),
            (0.0, 0.0),
            (37.8, 37.8),
            (85.4, 85.4),
            (100.0, 100.0),
            (100.1, 100.0),
        ] {
            harness.edit_widget(|this| WaitingSpinner::set_roundness(this, requested));
            assert_eq!(harness.widget().roundness(), stored);
        }
    }

    #[test]
    fn trail_pos_counts_backwards_from_the_head() {
        assert_eq!(line_trail_pos(5, 5, 10), 0);
        assert_eq!(line_trail_pos(0, 5, 10), 5);
        assert_eq!(line_trail_pos(7, 0, 10), 3);
        assert_eq!(line_trail_pos(7, 10, 15), 3);

        // Every line gets a distinct distance in `0..line_count`.
        let count = 12;
        for phase in 0..count {
            let mut seen = vec![false; count as usize];
            for line in 0..count {
                let pos = line_trail_pos(line, phase, count);
                assert!(pos < count);
                assert!(!seen[pos as usize]);
                seen[pos as usize] = true;
            }
        }
    }

    #[test]
    fn alpha_fades_linearly_then_floors() {
        let count = 10;
        let fade = 80.0;
        let min_opacity = PI;

        // fade_len = ceil(9 * 0.8) = 8, so the ramp spans distances 0..=8.
        let alpha = |pos| line_alpha(pos, count, fade, min_opacity, 1.0);
        assert_approx_eq!(f64, alpha(0), 1.0, epsilon = 1e-6);
        assert_approx_eq!(f64, alpha(3), 0.677_138_7, epsilon = 1e-6);
        assert_approx_eq!(f64, alpha(5), 0.461_897_8, epsilon = 1e-6);
        assert_approx_eq!(f64, alpha(8), 0.139_036_5, epsilon = 1e-6);
        assert_approx_eq!(f64, alpha(10), PI / 100.0, epsilon = 1e-6);

        // A translucent base color caps the head, not just the trail.
        assert_approx_eq!(f64, line_alpha(0, count, fade, 0.0, 0.5), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn opacity_floor_above_a_translucent_head_does_not_panic() {
        // min_trail_opacity 80% against a half-transparent color puts the
        // floor above the head alpha; the floor wins for every distance.
        for pos in 0..=10 {
            assert_approx_eq!(f64, line_alpha(pos, 10, 80.0, 80.0, 0.5), 0.8, epsilon = 1e-6);
        }
    }

    #[test]
    fn timer_advances_and_wraps_the_phase() {
        let mut harness = TestHarness::create(WaitingSpinner::new());
        harness.edit_widget(WaitingSpinner::start);
        assert_eq!(harness.widget().phase(), 0);

        harness.animate_ms(31);
        assert_eq!(harness.widget().phase(), 1);

        // 19 more ticks complete the revolution.
        harness.animate_ms(31 * 19);
        assert_eq!(harness.widget().phase(), 0);
    }

    #[test]
    fn tick_interval_never_reaches_zero() {
        // 20 lines at 100 revs/s derive to 0.5ms; the interval must not
        // truncate to a zero-period timer.
        let mut harness = TestHarness::create(WaitingSpinner::new());
        harness.edit_widget(|this| WaitingSpinner::set_revs_per_second(this, 100.0));
        assert_eq!(harness.widget().tick_interval(), Duration::from_millis(1));

        harness.edit_widget(WaitingSpinner::start);
        harness.animate_ms(5);
        assert_eq!(harness.widget().phase(), 5);
    }

    #[test]
    fn changing_line_count_rearms_the_timer() {
        let mut harness = TestHarness::create(WaitingSpinner::new());
        harness.edit_widget(WaitingSpinner::start);
        harness.animate_ms(31);
        assert_eq!(harness.widget().phase(), 1);

        // 1000 / (15 * π/2) truncates to 42ms.
        harness.edit_widget(|this| WaitingSpinner::set_line_count(this, 15));
        assert_eq!(harness.widget().phase(), 0);
        harness.animate_ms(41);
        assert_eq!(harness.widget().phase(), 0);
        harness.animate_ms(1);
        assert_eq!(harness.widget().phase(), 1);
    }

    #[test]
    fn footprint_follows_geometry_and_ignores_resizes() {
        let mut harness = TestHarness::create(WaitingSpinner::new());
        assert_eq!(harness.state().size(), Size::new(40.0, 40.0));

        harness.resize_widget(Size::new(300.0, 300.0));
        assert_eq!(harness.state().size(), Size::new(40.0, 40.0));

        harness.edit_widget(|this| WaitingSpinner::set_line_length(this, 15.5));
        assert_eq!(harness.state().size(), Size::new(51.0, 51.0));

        harness.edit_widget(|this| WaitingSpinner::set_inner_radius(this, 12.0));
        assert_eq!(harness.state().size(), Size::new(55.0, 55.0));
    }

    #[test]
    fn start_and_stop() {
        let mut harness = TestHarness::create(WaitingSpinner::new());
        assert!(!harness.state().is_visible());

        harness.edit_widget(WaitingSpinner::start);
        assert!(harness.state().is_visible());
        assert!(harness.widget().is_spinning());

        harness.animate_ms(31 * 3);
        assert_eq!(harness.widget().phase(), 3);

        harness.edit_widget(WaitingSpinner::stop);
        assert!(!harness.state().is_visible());
        assert!(!harness.widget().is_spinning());
        // Stopping leaves the phase; no further ticks arrive.
        assert_eq!(harness.widget().phase(), 3);
        harness.animate_ms(1000);
        assert_eq!(harness.widget().phase(), 3);

        // Restarting rewinds to the first frame.
        harness.edit_widget(WaitingSpinner::start);
        assert_eq!(harness.widget().phase(), 0);
    }

    #[test]
    fn start_while_spinning_is_a_no_op() {
        let mut harness = TestHarness::create(WaitingSpinner::new());
        harness.edit_widget(WaitingSpinner::start);
        harness.animate_ms(31 * 2);
        assert_eq!(harness.widget().phase(), 2);

        harness.edit_widget(WaitingSpinner::start);
        assert_eq!(harness.widget().phase(), 2);
    }

    #[test]
    fn starting_centers_the_spinner_in_the_host() {
        let mut harness =
            TestHarness::create_with_host_size(WaitingSpinner::new(), Size::new(200.0, 100.0));
        harness.edit_widget(WaitingSpinner::start);
        assert_eq!(harness.state().origin(), Point::new(80.0, 30.0));

        let mut harness = TestHarness::create_with_host_size(
            WaitingSpinner::new().with_centered(false),
            Size::new(200.0, 100.0),
        );
        harness.edit_widget(WaitingSpinner::start);
        assert_eq!(harness.state().origin(), Point::ZERO);
    }

    #[test]
    fn spinning_can_disable_host_input() {
        let mut harness = TestHarness::create(WaitingSpinner::new().with_host_disabled(true));
        assert!(harness.host().is_enabled());

        harness.edit_widget(WaitingSpinner::start);
        assert!(!harness.host().is_enabled());

        harness.edit_widget(WaitingSpinner::stop);
        assert!(harness.host().is_enabled());
    }

    #[test]
    fn modality_is_forwarded_on_add() {
        let harness = TestHarness::create(
            WaitingSpinner::new().with_modality(WindowModality::ApplicationModal),
        );
        assert_eq!(harness.host().modality(), WindowModality::ApplicationModal);
    }

    #[test]
    #[should_panic(expected = "line_count must be positive")]
    fn zero_line_count_is_rejected() {
        let mut harness = TestHarness::create(WaitingSpinner::new());
        harness.edit_widget(|this| WaitingSpinner::set_line_count(this, 0));
    }

    #[test]
    #[should_panic(expected = "speed must be positive")]
    fn non_positive_speed_is_rejected() {
        let mut harness = TestHarness::create(WaitingSpinner::new());
        harness.edit_widget(|this| WaitingSpinner::set_revs_per_second(this, 0.0));
    }

    #[test]
    fn paint_smoke_test() {
        let mut harness = TestHarness::create(WaitingSpinner::new());
        // Idle spinners paint nothing.
        let scene = harness.render();
        assert!(scene.encoding().is_empty());

        harness.edit_widget(WaitingSpinner::start);
        harness.animate_ms(31);
        let scene = harness.render();
        assert!(!scene.encoding().is_empty());
    }
}
