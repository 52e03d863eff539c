use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Datelike, Local, Weekday};

use crate::parse::{Diet, Line, Meal};

/// The finished plan of both cafeterias, rendered as plain text.
pub struct Plan<'a> {
    pub lines_mensa: &'a [Line],
    pub meals_mri: &'a [Meal],
    pub now: DateTime<Local>,
}

const fn diet_icon(diet: Diet) -> &'static str {
    match diet {
        Diet::Pork => "🐷",
        Diet::Beef => "🐮",
        Diet::Vegetarian => "🥕",
        Diet::Vegan => "🌱",
    }
}

const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

fn format_price(cents: u32) -> String {
    format!("{},{:02} €", cents / 100, cents % 100)
}

impl Display for Plan<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Speiseplan für {}, den {}",
            weekday_name(self.now.weekday()),
            self.now.format("%d.%m.%Y")
        )?;
        writeln!(f)?;
        writeln!(f, "Mensa am Adenauerring")?;
        for line in self.lines_mensa {
            writeln!(f)?;
            writeln!(f, "  {}", line.name)?;
            for meal in &line.meals {
                write!(f, "    ")?;
                if let Some(diet) = meal.diet {
                    write!(f, "{} ", diet_icon(diet))?;
                }
                write!(f, "{}", meal.name)?;
                if let Some(price) = meal.price {
                    write!(f, " ({})", format_price(price))?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "MRI-Casino")?;
        writeln!(f)?;
        for meal in self.meals_mri {
            writeln!(f, "  - {}", meal.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(350), "3,50 €");
        assert_eq!(format_price(1200), "12,00 €");
        assert_eq!(format_price(95), "0,95 €");
    }

    #[test]
    fn test_render_plan() {
        let lines_mensa = vec![Line {
            name: "Linie 1".to_string(),
            meals: vec![
                Meal {
                    diet: Some(Diet::Vegan),
                    name: "Spaghetti Napoli".to_string(),
                    price: Some(310),
                },
                Meal {
                    diet: None,
                    name: "Tagessuppe".to_string(),
                    price: Some(95),
                },
            ],
        }];
        let meals_mri = vec![Meal {
            diet: None,
            name: "Käsespätzle".to_string(),
            price: None,
        }];
        let now = Local.with_ymd_and_hms(2024, 4, 24, 12, 0, 0).unwrap();
        let plan = Plan {
            lines_mensa: &lines_mensa,
            meals_mri: &meals_mri,
            now,
        };
        let expected = "\
Speiseplan für Mittwoch, den 24.04.2024

Mensa am Adenauerring

  Linie 1
    🌱 Spaghetti Napoli (3,10 €)
    Tagessuppe (0,95 €)

MRI-Casino

  - Käsespätzle
";
        assert_eq!(plan.to_string(), expected);
    }
}
