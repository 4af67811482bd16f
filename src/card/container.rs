use crate::config::CardSettings;
use crate::render::{HierarchicalScheduleRenderer, RenderStats};
use crate::schedule::{Coordinates, ScheduleByDay};

use super::collaborators::{Analytics, Navigator};

/// Card lifecycle. The only transition is `NotMounted -> Mounted`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    NotMounted,
    Mounted,
}

/// One card instance on the dashboard.
///
/// The renderer is created once per instance and reused for every pass, so
/// diffing always runs against this card's own view chain.
pub struct ScheduleCard<A, N> {
    renderer: HierarchicalScheduleRenderer,
    lifecycle: Lifecycle,
    analytics: A,
    navigator: N,
}

impl<A: Analytics, N: Navigator> ScheduleCard<A, N> {
    pub fn new(card: CardSettings, analytics: A, navigator: N) -> Self {
        Self {
            renderer: HierarchicalScheduleRenderer::new(card),
            lifecycle: Lifecycle::NotMounted,
            analytics,
            navigator,
        }
    }

    pub fn id(&self) -> &str {
        &self.renderer.card_settings().id
    }

    pub fn title(&self) -> &str {
        &self.renderer.card_settings().title
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Name of the analytics event fired on mount.
    pub fn mount_event_name(&self) -> String {
        format!("Card Mounted: {}", self.title())
    }

    /// Mount the card. Fires the analytics event on the first call only;
    /// returns whether this call performed the transition.
    pub fn mount(&mut self) -> bool {
        match self.lifecycle {
            Lifecycle::Mounted => false,
            Lifecycle::NotMounted => {
                self.lifecycle = Lifecycle::Mounted;
                self.analytics.log_card_mounted(&self.mount_event_name());
                true
            }
        }
    }

    /// Run a render pass, mounting first if needed.
    pub fn render(&mut self, schedule: &ScheduleByDay) -> RenderStats {
        self.mount();
        self.renderer.render(schedule)
    }

    pub fn renderer(&self) -> &HierarchicalScheduleRenderer {
        &self.renderer
    }

    /// Walking directions for a pressed meeting. Meetings without usable
    /// coordinates are a no-op; returns whether the intent was forwarded.
    pub fn on_walk_pressed(&self, coordinates: Option<Coordinates>) -> bool {
        match coordinates {
            Some(c @ Coordinates { lat, lon }) if c.is_finite() => {
                self.navigator.launch_external_navigation(lat, lon);
                true
            }
            _ => false,
        }
    }

    pub fn on_view_full_schedule_pressed(&self) {
        self.navigator.navigate_to_full_schedule();
    }
}
