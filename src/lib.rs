// ============================================================================
// TRUSTBRIDGE CLIENT - Session, navigation and wizards for the donation SPA
// ============================================================================
// Layout:
// - Models: shapes shared with the backend
// - State: Rc<RefCell> stores with subscribers (session, navigation)
// - Navigation: page catalog, access-control resolver, navbar chrome
// - Wizard: multi-step form controller (signup, donation)
// - Services: HTTP and the token mirror only
// - ViewModels: submission logic over services and state
// - App: mounted screens and the JSON view handed to the JS renderer
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod navigation;
pub mod wizard;
pub mod services;
pub mod viewmodels;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::{App, FormKind, CHANGE_EVENT};
use crate::config::CONFIG;
use crate::models::Role;
use crate::viewmodels::SignInForm;
use crate::wizard::FieldValue;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 TrustBridge client ({})", CONFIG.environment);

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App::browser());
    });

    Ok(())
}

fn with_app<R>(f: impl FnOnce(&App) -> R) -> Result<R, JsValue> {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => Ok(f(app)),
        None => Err(JsValue::from_str("App not initialized")),
    })
}

fn form_kind(raw: &str) -> Result<FormKind, JsValue> {
    FormKind::parse(raw).ok_or_else(|| JsValue::from_str(&format!("Unknown form: {}", raw)))
}

fn no_form(kind: FormKind) -> JsValue {
    JsValue::from_str(&format!("No {:?} form on screen", kind))
}

/// Sync mounted screens with the current page and tell the renderer.
/// Runs outside any `APP` borrow (scheduled on a zero-delay timeout).
pub fn refresh_app() {
    let load_options = APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let app = slot.as_mut()?;
        if !app.sync_screens() {
            return None;
        }
        Some((app.donation_vm(), app.state().clone(), app.donation_handle()?))
    });

    if let Some((vm, state, form)) = load_options {
        wasm_bindgen_futures::spawn_local(async move {
            let options = vm.load_ngo_options(&state).await;
            APP.with(|cell| {
                if let Some(app) = cell.borrow_mut().as_mut() {
                    app.ngo_options_loaded(&form, options);
                }
            });
            schedule_refresh();
        });
    }

    notify_renderer();
}

fn schedule_refresh() {
    gloo_timers::callback::Timeout::new(0, refresh_app).forget();
}

fn notify_renderer() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match web_sys::CustomEvent::new(CHANGE_EVENT) {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                log::error!("❌ [APP] Could not dispatch change event: {:?}", e);
            }
        }
        Err(e) => log::error!("❌ [APP] Could not create change event: {:?}", e),
    }
}

// ----------------------------------------------------------------------------
// Navigation and session
// ----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn navigate(page_id: &str, entity_id: Option<u32>) -> Result<(), JsValue> {
    let state = with_app(|app| app.state().clone())?;
    state.navigation.navigate(page_id, entity_id.map(i64::from));
    Ok(())
}

#[wasm_bindgen]
pub fn sign_out() -> Result<(), JsValue> {
    let (vm, state) = with_app(|app| (app.session_vm(), app.state().clone()))?;
    vm.sign_out(&state);
    Ok(())
}

/// JSON view descriptor for the current frame
#[wasm_bindgen]
pub fn current_view() -> Result<String, JsValue> {
    with_app(|app| app.view_json())?.map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub async fn sign_in(email: String, password: String, role: String) -> Result<JsValue, JsValue> {
    let (vm, state) = with_app(|app| (app.session_vm(), app.state().clone()))?;
    let form = SignInForm {
        email,
        password,
        role: Role::parse(&role),
    };
    match vm.sign_in(&state, form).await {
        Ok(role) => Ok(JsValue::from_str(role.as_str())),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

// ----------------------------------------------------------------------------
// Forms
// ----------------------------------------------------------------------------

fn field_value(value: &JsValue) -> FieldValue {
    if let Some(flag) = value.as_bool() {
        FieldValue::Flag(flag)
    } else if let Some(number) = value.as_f64() {
        FieldValue::Number(number)
    } else {
        FieldValue::Text(value.as_string().unwrap_or_default())
    }
}

#[wasm_bindgen]
pub fn form_set_field(form: &str, name: &str, value: JsValue) -> Result<(), JsValue> {
    let kind = form_kind(form)?;
    if !with_app(|app| app.set_field(kind, name, field_value(&value)))? {
        return Err(no_form(kind));
    }
    schedule_refresh();
    Ok(())
}

/// Returns the new step; a blocked step rejects with the validation message
#[wasm_bindgen]
pub fn form_next(form: &str) -> Result<usize, JsValue> {
    let kind = form_kind(form)?;
    let step = with_app(|app| app.step_forward(kind))?
        .ok_or_else(|| no_form(kind))?
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    schedule_refresh();
    Ok(step)
}

#[wasm_bindgen]
pub fn form_back(form: &str) -> Result<usize, JsValue> {
    let kind = form_kind(form)?;
    let step = with_app(|app| app.step_back(kind))?.ok_or_else(|| no_form(kind))?;
    schedule_refresh();
    Ok(step)
}

/// Resolves with the signed-up role or the donation reference, or `null`
/// when the form was closed before the backend answered
#[wasm_bindgen]
pub async fn form_submit(form: String) -> Result<JsValue, JsValue> {
    let kind = form_kind(&form)?;
    let outcome = match kind {
        FormKind::Signup => {
            let (vm, state, handle) =
                with_app(|app| (app.signup_vm(), app.state().clone(), app.signup_handle()))?;
            let handle = handle.ok_or_else(|| no_form(kind))?;
            schedule_refresh();
            vm.submit(&state, &handle)
                .await
                .map(|role| role.map(|role| role.as_str().to_string()))
        }
        FormKind::Donation => {
            let (vm, state, handle) =
                with_app(|app| (app.donation_vm(), app.state().clone(), app.donation_handle()))?;
            let handle = handle.ok_or_else(|| no_form(kind))?;
            schedule_refresh();
            vm.submit(&state, &handle).await
        }
    };
    schedule_refresh();

    match outcome {
        Ok(Some(value)) => Ok(JsValue::from_str(&value)),
        Ok(None) => Ok(JsValue::NULL),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}
