//! Extractor for the MRI casino's weekly plan.
//!
//! The page is a list of Elementor cards, one per weekday. All class-name
//! literals mirror the live site's markup and break if the site changes.

use chrono::Weekday;
use scraper::ElementRef;

use super::error::{Error, Result};
use super::model::Meal;
use crate::static_selector;

/// Heading texts that mark a card as a day card, Monday to Friday.
static WEEKDAYS: [&str; 5] = ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag"];

/// Extracts the meals of the day card matching `today`.
///
/// Day cards are counted in document order and the nth one is taken to be
/// the nth weekday of the week; the heading text only decides whether a
/// card is a day card at all, never which day it belongs to. If the site
/// ever reorders its cards or skips a day, this silently picks the wrong
/// card. On Saturday and Sunday no card matches and the result is empty.
///
/// The source publishes neither prices nor diet information, so both stay
/// absent on every extracted [`Meal`].
pub fn parse_mri_page(element: ElementRef, today: Weekday) -> Result<Vec<Meal>> {
    static_selector!(CARD_SELECTOR <- "div.elementor-widget-wrap.elementor-element-populated");
    static_selector!(HEADING_SELECTOR <- "div.elementor-widget-heading");
    static_selector!(MEAL_LIST_SELECTOR <- "div.elementor-widget-icon-list");
    static_selector!(LIST_ITEM_SELECTOR <- "li");
    static_selector!(MEAL_NAME_SELECTOR <- "span.elementor-icon-list-text");

    let mut weekday_counter = 0u32..;
    let mut meals = vec![];
    for card in element.select(&CARD_SELECTOR) {
        let Some(heading) = card.select(&HEADING_SELECTOR).next() else {
            continue;
        };
        let heading_text: String = heading.text().collect();
        if !WEEKDAYS
            .iter()
            .any(|weekday| heading_text.contains(weekday))
        {
            continue;
        }
        if weekday_counter.next() != Some(today.num_days_from_monday()) {
            continue;
        }

        let meal_list = card.select(&MEAL_LIST_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("the selected day card should have an icon-list")
        })?;
        for item in meal_list.select(&LIST_ITEM_SELECTOR) {
            let name_element = item.select(&MEAL_NAME_SELECTOR).next().ok_or_else(|| {
                Error::html_parse_error("every meal list item should have a text span")
            })?;
            let name: String = name_element.text().collect();
            let name = name.trim_start_matches('•').trim().to_string();
            meals.push(Meal {
                diet: None,
                name,
                price: None,
            });
        }
    }
    Ok(meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn example_week() -> Html {
        let html = std::fs::read_to_string("./src/parse/html_examples/mri_week.html").unwrap();
        Html::parse_document(&html)
    }

    #[test]
    fn test_selects_card_by_position() {
        let doc = example_week();
        let meals =
            parse_mri_page(doc.root_element(), Weekday::Wed).expect("example should parse");
        // Only the third day card counts, whatever its heading says.
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].name, "Käsespätzle mit Röstzwiebeln");
        assert_eq!(meals[1].name, "Rinderroulade mit Rotkohl");
        for meal in &meals {
            assert_eq!(meal.diet, None);
            assert_eq!(meal.price, None);
        }
    }

    #[test]
    fn test_weekend_yields_no_meals() {
        let doc = example_week();
        for weekend_day in [Weekday::Sat, Weekday::Sun] {
            let meals = parse_mri_page(doc.root_element(), weekend_day)
                .expect("weekend should not be an error");
            assert!(meals.is_empty());
        }
    }

    #[test]
    fn test_match_is_positional_not_by_name() {
        // The first day card is returned for Monday even when its heading
        // names a different day.
        let html = r#"
            <div class="elementor-widget-wrap elementor-element-populated">
                <div class="elementor-widget-heading"><h3>Dienstag</h3></div>
                <div class="elementor-widget-icon-list">
                    <ul><li><span class="elementor-icon-list-text">• Gulasch</span></li></ul>
                </div>
            </div>"#;
        let doc = Html::parse_document(html);
        let meals =
            parse_mri_page(doc.root_element(), Weekday::Mon).expect("example should parse");
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Gulasch");
    }

    #[test]
    fn test_selected_card_without_meal_list_is_fatal() {
        // A day card is only parsed once selected; without its icon-list
        // there is nothing defined to extract.
        let html = r#"
            <div class="elementor-widget-wrap elementor-element-populated">
                <div class="elementor-widget-heading"><h3>Montag</h3></div>
            </div>"#;
        let doc = Html::parse_document(html);
        assert!(matches!(
            parse_mri_page(doc.root_element(), Weekday::Mon),
            Err(Error::HtmlParse(_))
        ));
    }

    #[test]
    fn test_cards_without_weekday_heading_are_not_counted() {
        // A leading non-day card must not shift the positional count.
        let html = r#"
            <div class="elementor-widget-wrap elementor-element-populated">
                <div class="elementor-widget-heading"><h2>Unser Speiseplan</h2></div>
            </div>
            <div class="elementor-widget-wrap elementor-element-populated">
                <div class="elementor-widget-heading"><h3>Montag</h3></div>
                <div class="elementor-widget-icon-list">
                    <ul><li><span class="elementor-icon-list-text">• Eintopf</span></li></ul>
                </div>
            </div>"#;
        let doc = Html::parse_document(html);
        let meals =
            parse_mri_page(doc.root_element(), Weekday::Mon).expect("example should parse");
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Eintopf");
    }
}
