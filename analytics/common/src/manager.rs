use api::{
    AnalyticsProvider, Event, KeyValueStore, Properties, ProviderDelegate, ProviderKind,
};
use log::{debug, info};
use std::any::Any;
use std::sync::{Arc, Weak};

use crate::config::AnalyticsConfig;
use crate::device::DeviceIdResolver;

/// Fans every analytics call out to the registered providers in order.
pub struct ProviderManager {
    providers: Vec<Box<dyn AnalyticsProvider>>,
    delegate: Option<Weak<dyn ProviderDelegate>>,
    device: DeviceIdResolver,
    global_properties: Properties,
}

impl ProviderManager {
    pub fn new() -> Self {
        Self::with_device_resolver(DeviceIdResolver::default())
    }

    pub fn with_device_resolver(device: DeviceIdResolver) -> Self {
        Self {
            providers: Vec::new(),
            delegate: None,
            device,
            global_properties: Properties::new(),
        }
    }

    pub fn with_config(config: &AnalyticsConfig, store: Box<dyn KeyValueStore>) -> Self {
        let mut manager = Self::with_device_resolver(DeviceIdResolver::with_config(config, store));
        manager.global_properties = config.global_properties.clone();
        manager
    }

    /// Appends a provider. Registering the same vendor twice dispatches to both.
    pub fn register(&mut self, provider: Box<dyn AnalyticsProvider>) {
        info!("Registered analytics provider: {}", provider.kind());
        self.providers.push(provider);
    }

    pub fn providers(&self) -> &[Box<dyn AnalyticsProvider>] {
        &self.providers
    }

    /// First registered provider tagged with `kind`.
    pub fn provider(&self, kind: ProviderKind) -> Option<&dyn AnalyticsProvider> {
        self.providers
            .iter()
            .find(|p| p.kind() == kind)
            .map(|p| p.as_ref())
    }

    /// First registered provider of concrete type `T`.
    pub fn provider_of<T: 'static>(&self) -> Option<&T> {
        self.providers
            .iter()
            .find_map(|p| p.as_any().downcast_ref::<T>())
    }

    pub fn provider_of_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.providers
            .iter_mut()
            .find_map(|p| p.as_any_mut().downcast_mut::<T>())
    }

    /// Installs the event delegate. Only a weak reference is kept.
    pub fn set_delegate(&mut self, delegate: &Arc<dyn ProviderDelegate>) {
        self.delegate = Some(Arc::downgrade(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn device_id(&mut self) -> String {
        self.device.device_id()
    }

    fn delegate(&self) -> Option<Arc<dyn ProviderDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }
}

impl Default for ProviderManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsProvider for ProviderManager {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Manager
    }

    fn setup(&mut self, properties: Option<&Properties>) {
        for provider in self.providers.iter_mut() {
            provider.setup(properties);
        }
        if !self.global_properties.is_empty() {
            for provider in self.providers.iter_mut() {
                provider.global(&self.global_properties, true);
            }
        }
    }

    fn activate(&mut self) {
        self.providers.iter_mut().for_each(|p| p.activate());
    }

    fn resign(&mut self) {
        self.providers.iter_mut().for_each(|p| p.resign());
    }

    fn flush(&mut self) {
        self.providers.iter_mut().for_each(|p| p.flush());
    }

    fn reset(&mut self) {
        self.providers.iter_mut().for_each(|p| p.reset());
    }

    fn event(&mut self, event: &Event) {
        // A live delegate has to opt every event in; without one, everything is sent.
        let delegate = self.delegate();
        let replaced;
        let event = match &delegate {
            Some(d) => match d.should_send_event(ProviderKind::Manager, event) {
                Some(updated) => {
                    replaced = updated;
                    &replaced
                }
                None => {
                    debug!("Delegate vetoed event {:?}", event.name);
                    return;
                }
            },
            None => event,
        };

        debug!(
            "Dispatching event {:?} to {} providers",
            event.name,
            self.providers.len()
        );
        for provider in self.providers.iter_mut() {
            #[cfg(feature = "xtralog")]
            log::trace!("-> {} {:?}", provider.kind(), event);
            provider.event(event);
        }

        if let Some(d) = delegate {
            d.did_send_event(ProviderKind::Manager, event);
        }
    }

    fn identify(&mut self, user_id: &str, properties: Option<&Properties>) {
        self.providers
            .iter_mut()
            .for_each(|p| p.identify(user_id, properties));
    }

    fn alias(&mut self, user_id: &str, for_id: &str) {
        self.providers
            .iter_mut()
            .for_each(|p| p.alias(user_id, for_id));
    }

    fn set(&mut self, properties: &Properties) {
        self.providers.iter_mut().for_each(|p| p.set(properties));
    }

    fn global(&mut self, properties: &Properties, overwrite: bool) {
        self.providers
            .iter_mut()
            .for_each(|p| p.global(properties, overwrite));
    }

    fn increment(&mut self, property: &str, by: f64) {
        self.providers
            .iter_mut()
            .for_each(|p| p.increment(property, by));
    }

    fn add_device(&mut self, token: &[u8]) {
        self.providers.iter_mut().for_each(|p| p.add_device(token));
    }

    fn set_push_token(&mut self, token: &str) {
        self.providers
            .iter_mut()
            .for_each(|p| p.set_push_token(token));
    }

    fn push(&mut self, payload: &serde_json::Value, event: Option<&str>) {
        self.providers
            .iter_mut()
            .for_each(|p| p.push(payload, event));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
