//! Review form: clickable star rating.

use std::rc::Rc;

use barbershop_app::lifecycle::InitGuard;
use barbershop_app::lookup;
use barbershop_domain::rating::StarRating;
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom::{self, DomError};

static RATING: InitGuard = InitGuard::new();

fn paint(stars: &[Element], rating: StarRating) {
    for (star, fill) in stars.iter().zip(rating.fills()) {
        let classes = star.class_list();
        if let Err(err) = classes
            .remove_1(fill.opposite_class())
            .and_then(|()| classes.add_1(fill.class()))
        {
            tracing::warn!(error = ?err, "failed to update star classes");
        }
    }
}

/// Bind every `.star-rating-item` to the hidden `#rating-value` input.
pub fn init(document: &Document) -> Result<(), DomError> {
    let Some(input) = dom::find::<HtmlInputElement>(document, lookup::RATING_INPUT) else {
        return Ok(());
    };
    let stars = dom::find_all(document, lookup::STAR_ITEMS)?;
    if stars.is_empty() || !RATING.begin("rating") {
        return Ok(());
    }
    let max = u8::try_from(stars.len()).unwrap_or(u8::MAX);
    paint(&stars, StarRating::parse_lenient(&input.value(), max));

    let stars = Rc::new(stars);
    for star in stars.iter() {
        let Some(ordinal) = star
            .get_attribute("data-rating")
            .and_then(|raw| raw.trim().parse::<u8>().ok())
        else {
            tracing::warn!("star without a numeric data-rating, skipping");
            continue;
        };
        let stars = Rc::clone(&stars);
        let input = input.clone();
        dom::listen(star, "click", move |_| {
            let mut rating = StarRating::parse_lenient(&input.value(), max);
            let value = rating.click(ordinal);
            input.set_value(&value.to_string());
            paint(&stars, rating);
        })?;
    }
    Ok(())
}
