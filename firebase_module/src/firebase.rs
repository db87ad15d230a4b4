use api::{AnalyticsProvider, Event, EventType, Properties, ProviderDelegate, ProviderKind};
use common::BaseProvider;
use log::{debug, info};
use std::any::Any;
use std::sync::Arc;

use crate::constants::EVENT_APP_OPEN;
use crate::mapping;
use crate::sdk::{FirebaseSdk, Parameters};

pub type TokenObserver = Box<dyn Fn(&str) + Send>;

/// An event after Firebase translation: vendor name and vendor parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FirebaseEvent {
    pub name: String,
    pub event_type: EventType,
    pub parameters: Parameters,
}

impl From<FirebaseEvent> for Event {
    fn from(event: FirebaseEvent) -> Self {
        Event {
            name: event.name,
            event_type: event.event_type,
            properties: event
                .parameters
                .into_iter()
                .map(|(k, v)| (k, v.into()))
                .collect(),
        }
    }
}

pub struct FirebaseProvider<S: FirebaseSdk> {
    base: BaseProvider<S>,
    token_observer: Option<TokenObserver>,
}

impl<S: FirebaseSdk> FirebaseProvider<S> {
    pub fn new(sdk: S) -> Self {
        Self {
            base: BaseProvider::new(sdk),
            token_observer: None,
        }
    }

    pub fn sdk(&self) -> &S {
        &self.base.sdk
    }

    pub fn sdk_mut(&mut self) -> &mut S {
        &mut self.base.sdk
    }

    pub fn base(&self) -> &BaseProvider<S> {
        &self.base
    }

    pub fn set_delegate(&mut self, delegate: &Arc<dyn ProviderDelegate>) {
        self.base.set_delegate(delegate);
    }

    /// Called with every messaging registration token Firebase hands out.
    pub fn on_registration_token(&mut self, observer: TokenObserver) {
        self.token_observer = Some(observer);
    }

    pub fn did_receive_registration_token(&self, token: &str) {
        debug!("Received FCM registration token");
        if let Some(observer) = &self.token_observer {
            observer(token);
        }
    }

    /// Base transform followed by the Firebase name and value tables.
    pub fn update(&self, event: &Event) -> Option<FirebaseEvent> {
        let event = self.base.update(event)?;
        let merged = self.base.merge_global(&event.properties, true);

        Some(FirebaseEvent {
            name: mapping::translate_event_name(&event.name),
            event_type: event.event_type,
            parameters: mapping::parameters(&merged),
        })
    }
}

impl<S: FirebaseSdk + 'static> AnalyticsProvider for FirebaseProvider<S> {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Firebase
    }

    fn setup(&mut self, _properties: Option<&Properties>) {
        info!("Configuring Firebase");
        self.base.sdk.configure();
    }

    fn activate(&mut self) {
        self.base.sdk.log_event(EVENT_APP_OPEN, &Parameters::new());
    }

    fn reset(&mut self) {
        self.base.reset();
        self.base.sdk.reset_analytics_data();
    }

    fn event(&mut self, event: &Event) {
        let Some(translated) = self.update(event) else {
            return;
        };

        match translated.event_type {
            EventType::Default => {
                self.base
                    .sdk
                    .log_event(&translated.name, &translated.parameters);
            }
            EventType::FinishTime => {
                self.base.event(event);
                self.base
                    .sdk
                    .log_event(&translated.name, &translated.parameters);
            }
            _ => {
                self.base.event(event);
            }
        }
        debug!("Firebase handled {:?} as {:?}", event.name, translated.name);

        if let Some(delegate) = self.base.delegate() {
            delegate.did_send_event(ProviderKind::Firebase, &translated.into());
        }
    }

    fn identify(&mut self, user_id: &str, properties: Option<&Properties>) {
        self.base.sdk.set_user_id(user_id);

        if let Some(properties) = properties {
            self.set(properties);
        }
    }

    fn set(&mut self, properties: &Properties) {
        for (name, value) in mapping::parameters(properties) {
            self.base.sdk.set_user_property(&value.to_string(), &name);
        }
    }

    fn global(&mut self, properties: &Properties, overwrite: bool) {
        self.base.global(properties, overwrite);
    }

    fn add_device(&mut self, token: &[u8]) {
        self.base.sdk.set_apns_token(token);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
