// This is free and unencumbered software released into the public domain.

use std::sync::{Arc, RwLock};

/// Device and session state changes reported by the camera framework.
///
/// These arrive on the framework's own callback threads, never on the
/// thread that called `start` or `stop`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewEvent {
    DeviceDisconnected { camera_id: String },
    DeviceError { camera_id: String, code: i32 },
    SessionReady,
    SessionActive,
    SessionClosed,
}

pub type PreviewListener = Arc<dyn Fn(&PreviewEvent) + Send + Sync + 'static>;

/// Fans platform callbacks out to the subscribed listeners.
#[derive(Default)]
pub struct EventHub {
    listeners: RwLock<Vec<PreviewListener>>,
}

impl core::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let count = self.listeners.read().map(|l| l.len()).unwrap_or(0);
        f.debug_struct("EventHub")
            .field("listeners", &count)
            .finish()
    }
}

impl EventHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn subscribe(&self, listener: PreviewListener) {
        if let Ok(mut g) = self.listeners.write() {
            g.push(listener);
        }
    }

    /// Calls every listener subscribed so far. The lock is released first,
    /// so a listener may subscribe or emit in turn.
    pub fn emit(&self, event: PreviewEvent) {
        let listeners = match self.listeners.read() {
            Ok(list) => list.clone(),
            Err(_) => return,
        };
        for l in listeners.iter() {
            (l)(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn emits_to_every_listener() {
        let hub = EventHub::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for _ in 0..2 {
            let seen = Arc::clone(&seen);
            hub.subscribe(Arc::new(move |e: &PreviewEvent| {
                seen.lock().unwrap().push(e.clone());
            }));
        }

        hub.emit(PreviewEvent::SessionReady);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![PreviewEvent::SessionReady, PreviewEvent::SessionReady]
        );
    }

    #[test]
    fn listener_may_subscribe_while_handling_an_event() {
        let hub = EventHub::new();
        let calls = Arc::new(Mutex::new(0));
        {
            let inner = Arc::downgrade(&hub);
            let calls = Arc::clone(&calls);
            hub.subscribe(Arc::new(move |_: &PreviewEvent| {
                *calls.lock().unwrap() += 1;
                if let Some(hub) = inner.upgrade() {
                    hub.subscribe(Arc::new(|_: &PreviewEvent| {}));
                }
            }));
        }

        hub.emit(PreviewEvent::SessionActive);
        hub.emit(PreviewEvent::SessionActive);

        assert_eq!(*calls.lock().unwrap(), 2);
        assert_eq!(hub.listeners.read().unwrap().len(), 3);
    }

    #[test]
    fn emit_without_listeners_is_a_no_op() {
        EventHub::new().emit(PreviewEvent::SessionClosed);
    }
}
