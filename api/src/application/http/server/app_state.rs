use std::sync::Arc;

use recanto_core::application::RecantoService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RecantoService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecantoService) -> Self {
        Self { args, service }
    }
}
