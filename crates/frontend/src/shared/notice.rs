//! Transient notices
//!
//! Non-blocking, dismissible messages (например, «не удалось загрузить
//! список»). Provided through context by [`NoticeService`] and rendered by
//! [`NoticeHost`].

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const AUTO_DISMISS_MS: u32 = 4000;
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Очередь уведомлений; старые вытесняются при переполнении
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    items: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notice {
            id: self.next_id,
            kind,
            text: text.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NoticeService {
    queue: RwSignal<NoticeQueue>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    pub fn push(&self, kind: NoticeKind, text: impl Into<String>) {
        let text = text.into();
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text));

        let queue = self.queue;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            queue.maybe_update(|q| q.dismiss(id));
        });
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.maybe_update(|q| q.dismiss(id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Сервис уведомлений из контекста, если он предоставлен
pub fn use_notices() -> Option<NoticeService> {
    use_context::<NoticeService>()
}

#[component]
pub fn NoticeHost() -> impl IntoView {
    let service = use_notices().unwrap_or_else(|| {
        let service = NoticeService::new();
        provide_context(service);
        service
    });

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class()>
                            {(notice.kind == NoticeKind::Error).then(|| icon("alert"))}
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__close"
                                title="Cerrar"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = NoticeQueue::default();
        let a = queue.push(NoticeKind::Error, "Error al cargar insumos");
        let b = queue.push(NoticeKind::Info, "Guardado");
        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 2);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items()[0].id, b);
    }

    #[test]
    fn test_oldest_notices_are_dropped() {
        let mut queue = NoticeQueue::default();
        for i in 0..6 {
            queue.push(NoticeKind::Info, format!("aviso {i}"));
        }
        let texts: Vec<_> = queue.items().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["aviso 2", "aviso 3", "aviso 4", "aviso 5"]);
    }
}
