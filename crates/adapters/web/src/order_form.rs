//! Order form: master → services dependent dropdown.

use std::rc::Rc;

use barbershop_app::config::FormConfig;
use barbershop_app::dropdown_controller::DependentDropdownController;
use barbershop_app::lifecycle::InitGuard;
use barbershop_app::lookup;
use barbershop_app::ports::ServicesView;
use barbershop_domain::dropdown::RenderedSelect;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

use crate::api::GlooServicesFetcher;
use crate::dom::{self, DomError};

static ORDER_FORM: InitGuard = InitGuard::new();

/// [`ServicesView`] writing into the services `<select>`.
pub struct SelectView {
    select: HtmlSelectElement,
}

impl SelectView {
    fn replace_options(&self, rendered: &RenderedSelect) -> Result<(), DomError> {
        self.select.set_inner_html("");
        for option in &rendered.options {
            let element =
                HtmlOptionElement::new_with_text_and_value_and_default_selected_and_selected(
                    &option.label,
                    &option.value,
                    option.selected,
                    option.selected,
                )?;
            element.set_disabled(option.disabled);
            self.select.append_child(&element)?;
        }
        self.select.set_disabled(!rendered.enabled);
        Ok(())
    }
}

impl ServicesView for SelectView {
    fn show(&self, select: &RenderedSelect) {
        if let Err(err) = self.replace_options(select) {
            tracing::error!(error = %err, "failed to render services options");
        }
    }
}

/// Wire the dropdown controller to the master and services selectors.
///
/// Missing selectors abort silently (logged). A master preselected by the
/// server is loaded right away, otherwise the disabled state is shown.
pub fn init(document: &Document, config: &FormConfig) -> Result<(), DomError> {
    if !ORDER_FORM.begin("order_form") {
        return Ok(());
    }

    let master_select = dom::find::<HtmlSelectElement>(document, lookup::MASTER_SELECT);
    let services_select = dom::find::<HtmlSelectElement>(document, lookup::SERVICES_SELECT);
    let (Some(master_select), Some(services_select)) = (master_select, services_select) else {
        tracing::debug!("order form elements not found");
        return Ok(());
    };

    let controller = Rc::new(
        DependentDropdownController::new(
            GlooServicesFetcher::new(config),
            SelectView {
                select: services_select,
            },
        )
        .with_placeholders(config.placeholders.clone()),
    );

    {
        let controller = Rc::clone(&controller);
        let master = master_select.clone();
        dom::listen(&master_select, "change", move |_| {
            let controller = Rc::clone(&controller);
            let selection = master.value();
            spawn_local(async move {
                controller.on_master_changed(&selection).await;
            });
        })?;
    }

    let initial = master_select.value();
    spawn_local(async move {
        controller.on_master_changed(&initial).await;
    });

    tracing::info!("order form initialised");
    Ok(())
}
