use std::sync::mpsc::Sender;

/// Analytics sink. Fire-and-forget.
pub trait Analytics {
    fn log_card_mounted(&self, name: &str);
}

/// Where press intents end up. Outcomes are the collaborator's business.
pub trait Navigator {
    fn navigate_to_full_schedule(&self);
    fn launch_external_navigation(&self, lat: f64, lon: f64);
}

/// Reports the mount event through the `log` facade.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogAnalytics;

impl Analytics for LogAnalytics {
    fn log_card_mounted(&self, name: &str) {
        log::info!("{name}");
    }
}

/// Intents delivered to the host's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum NavCmd {
    FullSchedule,
    Walk { lat: f64, lon: f64 },
}

/// Forwards intents over a channel to whoever drives the screens.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: Sender<NavCmd>,
}

impl ChannelNavigator {
    pub fn new(tx: Sender<NavCmd>) -> Self {
        Self { tx }
    }

    fn send(&self, cmd: NavCmd) {
        if let Err(e) = self.tx.send(cmd) {
            log::warn!("navigation intent dropped, receiver is gone: {:?}", e.0);
        }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate_to_full_schedule(&self) {
        self.send(NavCmd::FullSchedule);
    }

    fn launch_external_navigation(&self, lat: f64, lon: f64) {
        self.send(NavCmd::Walk { lat, lon });
    }
}
