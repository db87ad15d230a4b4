// Provider that mirrors every analytics call into the `log` facade.

use api::{AnalyticsProvider, Event, Properties, ProviderKind};
use log::Level;
use std::any::Any;

const TARGET: &str = "analytics";

pub struct LogProvider {
    level: Level,
    events_sent: u64,
}

impl LogProvider {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            events_sent: 0,
        }
    }

    pub fn events_sent(&self) -> u64 {
        self.events_sent
    }

    fn emit(&self, message: &str) {
        log::log!(target: TARGET, self.level, "{}", message);
    }
}

impl Default for LogProvider {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

fn describe(properties: &Properties) -> String {
    serde_json::to_string(properties).unwrap_or_else(|_| format!("{:?}", properties))
}

impl AnalyticsProvider for LogProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Log
    }

    fn setup(&mut self, properties: Option<&Properties>) {
        match properties {
            Some(p) => self.emit(&format!("setup {}", describe(p))),
            None => self.emit("setup"),
        }
    }

    fn activate(&mut self) {
        self.emit("activate");
    }

    fn resign(&mut self) {
        self.emit("resign");
    }

    fn flush(&mut self) {
        self.emit(&format!("flush after {} events", self.events_sent));
    }

    fn reset(&mut self) {
        self.emit("reset");
        self.events_sent = 0;
    }

    fn event(&mut self, event: &Event) {
        self.events_sent += 1;
        self.emit(&format!(
            "event {:?} ({:?}) {}",
            event.name,
            event.event_type,
            describe(&event.properties)
        ));
    }

    fn identify(&mut self, user_id: &str, properties: Option<&Properties>) {
        let props = properties.map(describe).unwrap_or_default();
        self.emit(&format!("identify {:?} {}", user_id, props));
    }

    fn alias(&mut self, user_id: &str, for_id: &str) {
        self.emit(&format!("alias {:?} -> {:?}", user_id, for_id));
    }

    fn set(&mut self, properties: &Properties) {
        self.emit(&format!("set {}", describe(properties)));
    }

    fn global(&mut self, properties: &Properties, overwrite: bool) {
        self.emit(&format!(
            "global {} (overwrite: {})",
            describe(properties),
            overwrite
        ));
    }

    fn increment(&mut self, property: &str, by: f64) {
        self.emit(&format!("increment {:?} by {}", property, by));
    }

    fn add_device(&mut self, token: &[u8]) {
        self.emit(&format!("add device token ({} bytes)", token.len()));
    }

    fn set_push_token(&mut self, token: &str) {
        self.emit(&format!("push token {:?}", token));
    }

    fn push(&mut self, payload: &serde_json::Value, event: Option<&str>) {
        self.emit(&format!("push {:?} {}", event, payload));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::PropertyValue;

    #[test]
    fn counts_events_until_reset() {
        let mut provider = LogProvider::default();
        provider.event(&Event::new("one"));
        provider.event(&Event::new("two").with_property("n", 2));
        assert_eq!(provider.events_sent(), 2);

        provider.reset();
        assert_eq!(provider.events_sent(), 0);
    }

    #[test]
    fn properties_are_described_as_json() {
        let props = Properties::from([("plan".to_string(), PropertyValue::from("pro"))]);
        assert_eq!(describe(&props), r#"{"plan":"pro"}"#);
    }
}
