/// Assign a model field and render only when the value actually changed.
///
/// ```ignore
/// update_field!(model.form.new_password, value)
/// ```
#[macro_export]
macro_rules! update_field {
    ($model_field:expr, $value:expr) => {{
        let value = $value;
        if $model_field != value {
            $model_field = value;
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};
}

/// Macro for authenticated POST requests with a JSON body whose outcome is
/// only a status. The response is reported as `Result<(), AuthFailure>`.
///
/// Without a session token no request is made: the response event is sent
/// right away carrying a 401 failure.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// auth_post!(Auth, AuthEvent, model, "/update-password", ChangePasswordResponse, "Change password",
///     body_json: &request
/// )
/// ```
#[macro_export]
macro_rules! auth_post {
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr) => {{
        $model.auth.start_loading();
        let respond = |event_result: Result<(), $crate::types::AuthFailure>| {
            $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                event_result,
            ))
        };
        if let Some(token) = &$model.auth.auth_token {
            match $crate::HttpCmd::post($crate::build_url($endpoint))
                .header("Authorization", format!("Bearer {token}"))
                .header("Content-Type", "application/json")
                .body_json($body)
            {
                Ok(builder) => crux_core::Command::all([
                    crux_core::render::render(),
                    builder.build().then_send(move |result| {
                        respond($crate::process_auth_response(result))
                    }),
                ]),
                Err(e) => crux_core::Command::all([
                    crux_core::render::render(),
                    crux_core::Command::event(respond(Err($crate::request_build_failure(
                        $action, e,
                    )))),
                ]),
            }
        } else {
            crux_core::Command::all([
                crux_core::render::render(),
                crux_core::Command::event(respond(Err($crate::not_authenticated($action)))),
            ])
        }
    }};
}
