use crate::error::{AppError, AppResult};
use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;

const TEMPLATES: [(&str, &str); 4] = [
    ("layout", include_str!("../templates/layout.hbs")),
    ("index", include_str!("../templates/index.hbs")),
    ("login", include_str!("../templates/login.hbs")),
    ("mbl", include_str!("../templates/mbl.hbs")),
];

/// Server-rendered HTML pages, compiled once at startup.
#[derive(Clone)]
pub struct Views {
    registry: Arc<Handlebars<'static>>,
}

impl Views {
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);

        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .map_err(|e| AppError::InternalError(format!("Template {name}: {e}")))?;
        }

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<String> {
        Ok(self.registry.render(name, data)?)
    }
}
