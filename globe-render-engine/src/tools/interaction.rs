use bevy::prelude::*;

use crate::engine::assets::population::PopulationPoint;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::point_picker::PointPickedEvent;

/// Formatted pick summary, delivered as a value so the presentation layer
/// decides how to show it. The render loop never blocks on a pick.
#[derive(Event, Debug, Clone)]
pub struct PickSummaryEvent {
    pub summary: String,
}

/// Group an integer count with thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Human-readable summary of a picked point.
pub fn format_population_summary(point: &PopulationPoint) -> String {
    format!(
        "Population: {}\nLat: {}, Lng: {}",
        group_thousands(point.population.round() as u64),
        point.latitude,
        point.longitude,
    )
}

/// Turn pick events into summary values for the frontend and the overlay.
pub fn deliver_pick_summaries(
    mut picked: EventReader<PointPickedEvent>,
    mut summaries: EventWriter<PickSummaryEvent>,
    mut rpc: ResMut<WebRpcInterface>,
) {
    for event in picked.read() {
        let summary = format_population_summary(&event.point);
        info!("point picked: {}", summary.replace('\n', " | "));
        rpc.send_notification(
            "point_picked",
            serde_json::json!({
                "summary": summary,
                "lat": event.point.latitude,
                "lng": event.point.longitude,
                "population": event.point.population,
                "colour": event.point.tier_info().hex,
            }),
        );
        summaries.write(PickSummaryEvent { summary });
    }
}

#[derive(Component)]
pub struct SummaryText;

/// Corner overlay showing the latest pick summary on native builds; the
/// WASM frontend renders its own tooltip from the RPC notification.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_summary_overlay(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                SummaryText,
            ));
        });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn update_summary_overlay(
    mut events: EventReader<PickSummaryEvent>,
    mut query: Query<&mut Text, With<SummaryText>>,
) {
    for event in events.read() {
        for mut text in &mut query {
            text.0 = event.summary.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(37_400_068), "37,400,068");
        assert_eq!(group_thousands(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn summary_combines_count_and_coordinates() {
        let point = PopulationPoint::new(35.68, 139.69, 37_400_068.0);
        let summary = format_population_summary(&point);
        assert_eq!(summary, "Population: 37,400,068\nLat: 35.68, Lng: 139.69");
    }

    #[test]
    fn flat_points_summarise_as_zero() {
        let point = PopulationPoint::new(1.0, 2.0, f64::NAN);
        let summary = format_population_summary(&point);
        assert!(summary.starts_with("Population: 0\n"));
    }
}
