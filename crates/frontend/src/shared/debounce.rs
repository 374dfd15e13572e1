//! Debounce and request-generation primitives
//!
//! Shared by the search combobox and the filtered list controller:
//! - [`TokenSource`] mints a strictly increasing [`RequestToken`] per remote call;
//!   a response is applied only while its token is still the current one.
//! - [`Debouncer`] coalesces a burst of triggers into one delayed action and
//!   hard-cancels the pending timer when superseded.
//! - [`Dispatcher`] sends requests either debounced or immediately.

use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::rc::Rc;

/// Поколение запроса. Сравнивается в момент применения ответа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Источник токенов одного экземпляра компонента
#[derive(Debug, Clone, Default)]
pub struct TokenSource {
    current: u64,
}

impl TokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выпускает новый токен; все ранее выпущенные становятся устаревшими
    pub fn mint(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    /// Supersedes every outstanding token without issuing a new request.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current
    }
}

/// Задержка debounce в миллисекундах, всегда больше нуля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DebounceDelay(NonZeroU32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("debounce delay must be greater than zero")]
pub struct ZeroDelay;

impl DebounceDelay {
    pub const MIN: DebounceDelay = DebounceDelay(NonZeroU32::MIN);

    pub fn new(millis: u32) -> Result<Self, ZeroDelay> {
        NonZeroU32::new(millis).map(Self).ok_or(ZeroDelay)
    }

    pub const fn millis(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for DebounceDelay {
    type Error = ZeroDelay;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DebounceDelay> for u32 {
    fn from(value: DebounceDelay) -> Self {
        value.millis()
    }
}

/// Источник таймеров. Handle dropped before firing cancels the timer.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: DebounceDelay, action: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Таймеры браузера через `gloo-timers`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Scheduler for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay: DebounceDelay, action: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay.millis(), action)
    }
}

/// Отменяемый отложенный вызов.
///
/// Each [`trigger`](Debouncer::trigger) drops the previous timer handle, which
/// clears it, so at most one action is pending at a time.
pub struct Debouncer<S: Scheduler = BrowserTimers> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl Debouncer<BrowserTimers> {
    pub fn new() -> Self {
        Self::with_scheduler(BrowserTimers)
    }
}

impl Default for Debouncer<BrowserTimers> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scheduler> Debouncer<S> {
    pub fn with_scheduler(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn trigger<F>(&mut self, delay: DebounceDelay, action: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(delay, Box::new(action)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Политика отправки запросов: набор текста идёт через debounce, явные
/// действия (фокус, переход по странице) уходят сразу и отменяют ожидающий
/// вызов.
pub struct Dispatcher<K: 'static, S: Scheduler = BrowserTimers> {
    debouncer: Debouncer<S>,
    delay: DebounceDelay,
    sink: Rc<dyn Fn(K)>,
}

impl<K: 'static> Dispatcher<K, BrowserTimers> {
    pub fn new(delay: DebounceDelay, sink: impl Fn(K) + 'static) -> Self {
        Self::with_scheduler(BrowserTimers, delay, sink)
    }
}

impl<K: 'static, S: Scheduler> Dispatcher<K, S> {
    pub fn with_scheduler(scheduler: S, delay: DebounceDelay, sink: impl Fn(K) + 'static) -> Self {
        Self {
            debouncer: Debouncer::with_scheduler(scheduler),
            delay,
            sink: Rc::new(sink),
        }
    }

    pub fn debounced(&mut self, request: K) {
        let sink = self.sink.clone();
        self.debouncer.trigger(self.delay, move || sink(request));
    }

    pub fn immediate(&mut self, request: K) {
        self.debouncer.cancel();
        (self.sink)(request);
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
