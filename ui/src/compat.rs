// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    pub mod interval {
        use std::time::Duration;
        use tokio::sync::mpsc;

        /// A repeating timer. The first tick completes one period after creation.
        ///
        /// The underlying browser interval is cleared when this is dropped.
        pub struct Interval {
            inner: Option<gloo_timers::callback::Interval>,
            rx: mpsc::UnboundedReceiver<()>,
        }

        impl Interval {
            pub fn new(duration: Duration) -> Self {
                let (tx, rx) = mpsc::unbounded_channel();
                let gloo_interval =
                    gloo_timers::callback::Interval::new(duration.as_millis() as u32, move || {
                        let _ = tx.send(());
                    });

                Self {
                    inner: Some(gloo_interval),
                    rx,
                }
            }

            pub async fn tick(&mut self) {
                let _ = self.rx.recv().await;
            }
        }

        impl Drop for Interval {
            fn drop(&mut self) {
                if let Some(inner) = self.inner.take() {
                    inner.cancel();
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    pub mod interval {
        use tokio::time::{self, Duration, Instant, MissedTickBehavior};

        /// A repeating timer. The first tick completes one period after creation.
        pub struct Interval {
            inner: tokio::time::Interval,
        }
        impl Interval {
            pub fn new(duration: Duration) -> Self {
                let mut interval = time::interval_at(Instant::now() + duration, duration);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Self { inner: interval }
            }
            pub async fn tick(&mut self) {
                self.inner.tick().await;
            }
        }
    }
}
