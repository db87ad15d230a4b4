use api::{Event, EventType, Properties, ProviderDelegate};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

/// Shared state and behaviour for vendor adapters.
///
/// Adapters own one of these next to their vendor SDK handle and call into
/// it before applying their own translation tables.
pub struct BaseProvider<S> {
    pub sdk: S,
    global_properties: Properties,
    timers: HashMap<String, Instant>,
    delegate: Option<Weak<dyn ProviderDelegate>>,
}

impl<S> BaseProvider<S> {
    pub fn new(sdk: S) -> Self {
        Self {
            sdk,
            global_properties: Properties::new(),
            timers: HashMap::new(),
            delegate: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: &Arc<dyn ProviderDelegate>) {
        self.delegate = Some(Arc::downgrade(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn delegate(&self) -> Option<Arc<dyn ProviderDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    pub fn global_properties(&self) -> &Properties {
        &self.global_properties
    }

    /// Base transform applied before vendor tables. Returning `None` drops the event.
    pub fn update(&self, event: &Event) -> Option<Event> {
        Some(event.clone())
    }

    /// Base side effect for timed events.
    ///
    /// `Time` starts a timer under the event name, `FinishTime` stops it and
    /// returns the elapsed time when a timer was running.
    pub fn event(&mut self, event: &Event) -> Option<Duration> {
        match event.event_type {
            EventType::Time => {
                self.timers.insert(event.name.clone(), Instant::now());
                debug!("Started timer for {:?}", event.name);
                None
            }
            EventType::FinishTime => {
                let elapsed = self.timers.remove(&event.name).map(|start| start.elapsed());
                match elapsed {
                    Some(d) => info!("Event {:?} finished after {:?}", event.name, d),
                    None => debug!("No running timer for {:?}", event.name),
                }
                elapsed
            }
            _ => None,
        }
    }

    pub fn is_timing(&self, name: &str) -> bool {
        self.timers.contains_key(name)
    }

    /// Updates the global properties. Without `overwrite`, existing keys are kept.
    pub fn global(&mut self, properties: &Properties, overwrite: bool) {
        for (key, value) in properties {
            if overwrite || !self.global_properties.contains_key(key) {
                self.global_properties.insert(key.clone(), value.clone());
            }
        }
    }

    /// Combines global properties with `properties`.
    ///
    /// With `overwrite`, values from `properties` replace globals of the same
    /// key; otherwise globals win.
    pub fn merge_global(&self, properties: &Properties, overwrite: bool) -> Properties {
        let mut merged = self.global_properties.clone();
        for (key, value) in properties {
            if overwrite || !merged.contains_key(key) {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }

    pub fn reset(&mut self) {
        self.timers.clear();
        self.global_properties.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::PropertyValue;

    #[test]
    fn global_without_overwrite_keeps_existing_keys() {
        let mut base = BaseProvider::new(());
        base.global(&Properties::from([("plan".to_string(), PropertyValue::from("free"))]), true);
        base.global(
            &Properties::from([
                ("plan".to_string(), PropertyValue::from("pro")),
                ("region".to_string(), PropertyValue::from("eu")),
            ]),
            false,
        );

        assert_eq!(base.global_properties()["plan"], PropertyValue::from("free"));
        assert_eq!(base.global_properties()["region"], PropertyValue::from("eu"));
    }

    #[test]
    fn merge_prefers_event_values_when_overwriting() {
        let mut base = BaseProvider::new(());
        base.global(&Properties::from([("plan".to_string(), PropertyValue::from("free"))]), true);

        let event_props = Properties::from([("plan".to_string(), PropertyValue::from("pro"))]);
        assert_eq!(base.merge_global(&event_props, true)["plan"], PropertyValue::from("pro"));
        assert_eq!(base.merge_global(&event_props, false)["plan"], PropertyValue::from("free"));
    }

    #[test]
    fn finish_time_stops_the_running_timer() {
        let mut base = BaseProvider::new(());
        let start = Event::new("level").with_type(EventType::Time);
        let finish = Event::new("level").with_type(EventType::FinishTime);

        assert!(base.event(&start).is_none());
        assert!(base.is_timing("level"));
        assert!(base.event(&finish).is_some());
        assert!(!base.is_timing("level"));
        assert!(base.event(&finish).is_none());
    }
}
