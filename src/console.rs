//! Colorful console output for dispatch results.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use crate::domain::{Courier, Order, Vehicle};

/// ASCII art banner for the demo binary.
pub fn print_banner() {
    let banner = r#"
   ____                  _              ____  _                 _       _
  / ___|___  _   _ _ __ (_) ___ _ __   |  _ \(_)___ _ __   __ _| |_ ___| |__
 | |   / _ \| | | | '__|| |/ _ \ '__|  | | | | / __| '_ \ / _` | __/ __| '_ \
 | |__| (_) | |_| | |   | |  __/ |     | |_| | \__ \ |_) | (_| | || (__| | | |
  \____\___/ \__,_|_|   |_|\___|_|     |____/|_|___/ .__/ \__,_|\__\___|_| |_|
                                                   |_|
"#;
    println!("{}", banner.cyan().bold());
    println!(
        "  {} {}\n",
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black(),
        "Courier Dispatch".bright_cyan()
    );
}

/// Prints the loaded dataset sizes.
pub fn print_summary(order_count: usize, courier_count: usize) {
    println!(
        "  Catalog: {} orders, roster: {} couriers\n",
        order_count.to_formatted_string(&Locale::en).bright_yellow(),
        courier_count.to_formatted_string(&Locale::en).bright_yellow()
    );
}

/// Prints one courier's prioritized order board.
pub fn print_board(courier: &Courier, orders: &[Order]) {
    println!(
        "{} {} {} {}",
        "▸".bright_blue(),
        courier.name.white().bold(),
        format!("({})", courier.id).bright_black(),
        format!(
            "[{}{}]",
            vehicle_label(courier.vehicle),
            if courier.carries_box { ", box" } else { "" }
        )
        .bright_black()
    );

    if orders.is_empty() {
        println!("    {}", "no eligible orders".bright_black());
        println!();
        return;
    }

    for (position, order) in orders.iter().enumerate() {
        let pickup_m = (courier.location.distance_km(&order.pickup) * 1000.0).round() as u64;
        let pickup = format!("{} m", pickup_m.to_formatted_string(&Locale::en));
        println!(
            "    {} {} {} {}{}{}",
            format!("{:>2}.", position + 1).white(),
            order.id.bright_cyan(),
            format!("{:>8}", pickup).yellow(),
            first_line(&order.description).white(),
            if order.vip {
                " VIP".bright_magenta().bold().to_string()
            } else {
                String::new()
            },
            if order.food {
                " FOOD".bright_green().to_string()
            } else {
                String::new()
            }
        );
    }
    println!();
}

fn vehicle_label(vehicle: Vehicle) -> &'static str {
    match vehicle {
        Vehicle::Car => "car",
        Vehicle::Motorcycle => "motorcycle",
        Vehicle::ElectricScooter => "electric scooter",
        Vehicle::Bicycle => "bicycle",
        Vehicle::Walking => "walking",
    }
}

/// First line of a possibly multi-line order description.
fn first_line(description: &str) -> &str {
    description.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_cuts_at_newline() {
        assert_eq!(first_line("1x Hot dog\n2x Kebab"), "1x Hot dog");
        assert_eq!(first_line("Envelope"), "Envelope");
        assert_eq!(first_line(""), "");
    }
}
