mod auth;
mod form;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => {
            *model = Model::default();
            render()
        }
        Event::Auth(auth_event) => auth::handle(auth_event, model),
        Event::Form(form_event) => form::handle(form_event, model),
    }
}
