use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::traversal_service::TraversalEngine;

pub struct AppState {
    pub engine: Signal<Option<TraversalEngine>>,
    pub status: Signal<String>,
    pub skip_reason: Signal<String>,
    pub skip_warning: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: use_signal(|| None::<TraversalEngine>),
            status: use_signal(|| "Ready".to_string()),
            skip_reason: use_signal(String::new),
            skip_warning: use_signal(|| None::<String>),
        }
    }
}
