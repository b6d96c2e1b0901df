//! Events
//!
//! Typed publish/subscribe for components that are not in a parent/child relation. A channel is
//! owned by the nearest common ancestor of its publishers and subscribers and handed to them
//! explicitly; there is no process-wide bus.
//!
//! Delivery is synchronous and in subscription order. Nothing is buffered: publishing with no
//! subscribers drops the payload.

use std::{
    fmt,
    marker::PhantomData,
    sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError},
};

use slotmap::{SlotMap, new_key_type};
use tracing::{debug, warn};

new_key_type! {
    /// Subscription Key
    pub struct SubscriptionKey;
}

/// A named topic and the payload it carries.
pub trait Topic: 'static {
    /// Payload delivered to subscribers.
    type Payload: 'static;

    /// Stable topic name, used in logs.
    const NAME: &'static str;
}

type Handler<P> = Arc<Mutex<dyn FnMut(&P) + Send>>;

struct Subscribers<P> {
    handlers: SlotMap<SubscriptionKey, Handler<P>>,
    order: Vec<SubscriptionKey>,
}

impl<P> Default for Subscribers<P> {
    fn default() -> Self {
        Self {
            handlers: SlotMap::with_key(),
            order: Vec::new(),
        }
    }
}

/// Publish/subscribe channel for a single topic.
///
/// Cloning is cheap and every clone shares the same subscribers. The channel is `Send + Sync`
/// so it can be captured by reactive closures, but handlers run on the publishing thread.
pub struct EventChannel<T: Topic> {
    subscribers: Arc<Mutex<Subscribers<T::Payload>>>,
    topic: PhantomData<fn() -> T>,
}

impl<T: Topic> EventChannel<T> {
    /// Create a channel with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Subscribers::default())),
            topic: PhantomData,
        }
    }

    /// Register a handler; it receives every payload published until it is unsubscribed.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionKey
    where
        F: FnMut(&T::Payload) + Send + 'static,
    {
        let handler: Handler<T::Payload> = Arc::new(Mutex::new(handler));

        let mut subscribers = self.lock();
        let key = subscribers.handlers.insert(handler);

        subscribers.order.push(key);

        debug!(
            topic = T::NAME,
            subscribers = subscribers.order.len(),
            "subscribed"
        );

        key
    }

    /// Remove a handler. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&self, key: SubscriptionKey) -> bool {
        let mut subscribers = self.lock();

        if subscribers.handlers.remove(key).is_none() {
            return false;
        }

        subscribers.order.retain(|existing| *existing != key);

        debug!(
            topic = T::NAME,
            subscribers = subscribers.order.len(),
            "unsubscribed"
        );

        true
    }

    /// Deliver `payload` to every current subscriber, in subscription order.
    ///
    /// Returns the number of handlers invoked. A handler that publishes on this channel while
    /// it is running is not invoked again for the nested payload. Handlers subscribed during
    /// delivery first receive the next publish; handlers unsubscribed during delivery receive
    /// nothing further.
    pub fn publish(&self, payload: &T::Payload) -> usize {
        let snapshot: Vec<(SubscriptionKey, Handler<T::Payload>)> = {
            let subscribers = self.lock();

            subscribers
                .order
                .iter()
                .filter_map(|key| {
                    subscribers
                        .handlers
                        .get(*key)
                        .map(|handler| (*key, Arc::clone(handler)))
                })
                .collect()
        };

        let mut delivered = 0;

        for (key, handler) in snapshot {
            if !self.lock().handlers.contains_key(key) {
                continue;
            }

            let mut guard = match handler.try_lock() {
                Ok(guard) => guard,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                Err(TryLockError::WouldBlock) => {
                    warn!(topic = T::NAME, "skipping handler that is already running");

                    continue;
                }
            };

            let handler = &mut *guard;

            handler(payload);

            delivered += 1;
        }

        debug!(topic = T::NAME, delivered, "published");

        delivered
    }

    /// Number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.lock().order.len()
    }

    fn lock(&self) -> MutexGuard<'_, Subscribers<T::Payload>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Topic> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Topic> Clone for EventChannel<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
            topic: PhantomData,
        }
    }
}

impl<T: Topic> fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("topic", &T::NAME)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    struct Greeting;

    impl Topic for Greeting {
        type Payload = String;

        const NAME: &'static str = "greeting";
    }

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(&String) + Send + 'static) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);

        (received, move |payload: &String| {
            if let Ok(mut received) = sink.lock() {
                received.push(payload.clone());
            }
        })
    }

    fn recorded(received: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
        received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    #[test]
    fn publish_without_subscribers_is_dropped() {
        let channel = EventChannel::<Greeting>::new();

        assert_eq!(channel.publish(&"hello".to_string()), 0);
    }

    #[test]
    fn publish_delivers_to_every_subscriber() {
        let channel = EventChannel::<Greeting>::new();
        let (first, first_handler) = recorder();
        let (second, second_handler) = recorder();

        channel.subscribe(first_handler);
        channel.subscribe(second_handler);

        assert_eq!(channel.publish(&"hello".to_string()), 2);
        assert_eq!(recorded(&first), ["hello"]);
        assert_eq!(recorded(&second), ["hello"]);
    }

    #[test]
    fn publish_follows_subscription_order() {
        let channel = EventChannel::<Greeting>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let log = Arc::clone(&log);

            channel.subscribe(move |_payload: &String| {
                if let Ok(mut log) = log.lock() {
                    log.push(name);
                }
            });
        }

        channel.publish(&String::new());

        let order = log.lock().map(|log| log.clone()).unwrap_or_default();

        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn order_survives_slot_reuse() {
        let channel = EventChannel::<Greeting>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let subscribe = |name: &'static str| {
            let log = Arc::clone(&log);

            channel.subscribe(move |_payload: &String| {
                if let Ok(mut log) = log.lock() {
                    log.push(name);
                }
            })
        };

        let first = subscribe("first");
        subscribe("second");
        channel.unsubscribe(first);
        subscribe("third");

        channel.publish(&String::new());

        let order = log.lock().map(|log| log.clone()).unwrap_or_default();

        assert_eq!(order, ["second", "third"]);
    }

    #[test]
    fn unsubscribed_handler_receives_nothing() {
        let channel = EventChannel::<Greeting>::new();
        let (received, handler) = recorder();

        let key = channel.subscribe(handler);

        assert!(channel.unsubscribe(key));
        assert!(!channel.unsubscribe(key));
        assert_eq!(channel.publish(&"hello".to_string()), 0);
        assert!(recorded(&received).is_empty());
    }

    #[test]
    fn clones_share_subscribers() {
        let channel = EventChannel::<Greeting>::new();
        let publisher = channel.clone();
        let (received, handler) = recorder();

        channel.subscribe(handler);
        publisher.publish(&"from a clone".to_string());

        assert_eq!(channel.subscriber_count(), 1);
        assert_eq!(recorded(&received), ["from a clone"]);
    }

    #[test]
    fn reentrant_publish_skips_running_handler() {
        let channel = EventChannel::<Greeting>::new();
        let inner = channel.clone();
        let (received, handler) = recorder();
        let mut handler = handler;

        channel.subscribe(move |payload: &String| {
            handler(payload);

            if payload == "outer" {
                inner.publish(&"inner".to_string());
            }
        });

        assert_eq!(channel.publish(&"outer".to_string()), 1);
        assert_eq!(recorded(&received), ["outer"]);
    }

    #[test]
    fn subscribing_during_delivery_applies_to_next_publish() {
        let channel = EventChannel::<Greeting>::new();
        let late = channel.clone();
        let (received, handler) = recorder();
        let mut handler = Some(handler);

        channel.subscribe(move |_payload: &String| {
            if let Some(handler) = handler.take() {
                late.subscribe(handler);
            }
        });

        assert_eq!(channel.publish(&"first".to_string()), 1);
        assert_eq!(channel.publish(&"second".to_string()), 2);
        assert_eq!(recorded(&received), ["second"]);
    }

    #[test]
    fn debug_shows_topic_and_count() {
        let channel = EventChannel::<Greeting>::new();

        channel.subscribe(|_payload: &String| {});

        let debug = format!("{channel:?}");

        assert!(debug.contains("greeting"));
        assert!(debug.contains("subscribers: 1"));
    }
}
