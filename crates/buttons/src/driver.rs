//! Driver facade.
//!
//! [`ButtonDriver`] bundles the channel, the registry and the configuration
//! so the whole pipeline can live in one `static`:
//!
//! ```no_run
//! use buttons::{ButtonConfig, ButtonDriver};
//! use platform::{ButtonEvent, LineId};
//!
//! static BUTTONS: ButtonDriver = ButtonDriver::new(ButtonConfig::new());
//!
//! fn on_button(event: ButtonEvent, line: LineId) {
//!     let _ = (event, line);
//! }
//!
//! # async fn start(mut irq: platform::mocks::MockInterrupts) {
//! let mut worker = BUTTONS.init(&mut irq).ok().unwrap();
//! let capture = BUTTONS.register(&mut irq, LineId::new(0), Some(&on_button)).ok().unwrap();
//! // bind `capture` to the line's edge interrupt, then:
//! worker.run().await;
//! # }
//! ```

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use platform::{ActiveLevel, ButtonHandler, EdgeInterrupts, LineConfig, LineId};

use crate::capture::EdgeCapture;
use crate::channel::EventChannel;
use crate::click::ClickTracker;
use crate::config::{ButtonConfig, CHANNEL_DEPTH, MAX_BUTTONS};
use crate::engine::Worker;
use crate::error::{InitError, RegisterError};
use crate::registry::{Button, ButtonId, Registry};

/// Process-wide button pipeline.
///
/// `N` is the number of button slots, `DEPTH` the number of raw edges that
/// may queue before new ones are dropped.
pub struct ButtonDriver<const N: usize = MAX_BUTTONS, const DEPTH: usize = CHANNEL_DEPTH> {
    config: ButtonConfig,
    channel: EventChannel<DEPTH>,
    registry: Registry<N>,
    initialized: Mutex<CriticalSectionRawMutex, Cell<bool>>,
}

impl<const N: usize, const DEPTH: usize> ButtonDriver<N, DEPTH> {
    /// Uninitialized driver. Nothing is validated until [`init`](Self::init).
    pub const fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            channel: EventChannel::new(),
            registry: Registry::new(),
            initialized: Mutex::new(Cell::new(false)),
        }
    }

    /// Configuration the driver was built with.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Whether [`init`](Self::init) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized.lock(Cell::get)
    }

    /// Validate the configuration, install the edge-interrupt service and
    /// hand out the worker.
    ///
    /// Only the first successful call has any effect. Later calls return
    /// [`InitError::AlreadyInitialized`] and touch neither `irq` nor the
    /// channel, so there is only ever one worker.
    pub fn init<I: EdgeInterrupts>(
        &self,
        irq: &mut I,
    ) -> Result<Worker<'_, N, DEPTH>, InitError<I::Error>> {
        self.config.validate()?;

        if self.initialized.lock(|flag| flag.replace(true)) {
            warn!("button driver already initialized");
            return Err(InitError::AlreadyInitialized);
        }

        if let Err(e) = irq.install() {
            self.initialized.lock(|flag| flag.set(false));
            error!("edge interrupt install failed");
            return Err(InitError::Interrupts(e));
        }

        info!(
            "button driver ready: {} slots, {} queued edges",
            self.registry.capacity(),
            self.channel.capacity()
        );
        Ok(Worker::new(self.channel.receiver(), &self.registry))
    }

    /// Register `line` with the driver-wide active level.
    ///
    /// A `None` handler is accepted; its events are logged and discarded.
    /// See [`register_with`](Self::register_with).
    pub fn register<I: EdgeInterrupts>(
        &self,
        irq: &mut I,
        line: LineId,
        handler: Option<&'static dyn ButtonHandler>,
    ) -> Result<EdgeCapture<'_, DEPTH>, RegisterError<I::Error>> {
        self.register_with(irq, line, self.config.active_level, handler)
    }

    /// Configure `line` through `irq` and start tracking it.
    ///
    /// On success the returned capture handle must be bound to the line's
    /// edge interrupt. On any error the registry is unchanged; a duplicate
    /// keeps the original handler.
    ///
    /// Registration is a setup step and calls are expected not to overlap.
    /// If two calls for the same line do overlap, both may configure the
    /// pin, but only the first to finish is recorded; the other returns
    /// [`RegisterError::AlreadyRegistered`].
    pub fn register_with<I: EdgeInterrupts>(
        &self,
        irq: &mut I,
        line: LineId,
        active: ActiveLevel,
        handler: Option<&'static dyn ButtonHandler>,
    ) -> Result<EdgeCapture<'_, DEPTH>, RegisterError<I::Error>> {
        if !self.is_initialized() {
            warn!("{} registered before init", line);
            return Err(RegisterError::NotInitialized);
        }

        if let Err(e) = self.registry.check_free(line) {
            match e {
                RegisterError::AlreadyRegistered(_) => warn!("{} already registered", line),
                _ => warn!("no free button slot for {}", line),
            }
            return Err(e);
        }

        if let Err(e) = irq.configure(line, LineConfig::button(active)) {
            error!("failed to configure {}", line);
            return Err(RegisterError::Interrupts(e));
        }

        let button = Button {
            line,
            active,
            handler,
            clicks: ClickTracker::new(&self.config),
        };
        let id = match self.registry.insert(button) {
            Ok(id) => id,
            Err(e) => {
                warn!("{} registered concurrently, keeping the first", line);
                return Err(e);
            }
        };
        info!("{} registered as button {}", line, id.index());

        Ok(EdgeCapture::new(line, active, self.channel.sender()))
    }

    /// Capture handle for an already registered line.
    pub fn capture(&self, line: LineId) -> Option<EdgeCapture<'_, DEPTH>> {
        let id = self.registry.find(line)?;
        let active = self.registry.with_button(id, |button| button.active)?;
        Some(EdgeCapture::new(line, active, self.channel.sender()))
    }

    /// Slot of `line`, if registered.
    pub fn find(&self, line: LineId) -> Option<ButtonId> {
        self.registry.find(line)
    }

    /// Number of registered buttons.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no button is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw edges waiting for the worker.
    pub fn pending_edges(&self) -> usize {
        self.channel.len()
    }
}

impl<const N: usize, const DEPTH: usize> Default for ButtonDriver<N, DEPTH> {
    fn default() -> Self {
        Self::new(ButtonConfig::new())
    }
}
