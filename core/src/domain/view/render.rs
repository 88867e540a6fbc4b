use urlencoding::encode;

use crate::domain::guide::entities::GuideResult;

/// Display-ready projection of a [`GuideResult`]. Building it is pure so the
/// list rendering can be tested without a DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub landmark_name: String,
    pub location: String,
    pub description: String,
    pub history: String,
    pub maps_link: String,
    /// Itinerary entries prefixed with their day label.
    pub itinerary: Vec<String>,
    pub food: Vec<String>,
    pub greeting: String,
}

pub fn render_result(result: &GuideResult) -> ResultView {
    let itinerary = result
        .itinerary
        .iter()
        .enumerate()
        .map(|(index, plan)| format!("Day {}: {}", index + 1, plan))
        .collect();

    ResultView {
        landmark_name: result.landmark_name.clone(),
        location: result.location.clone(),
        description: result.description.clone(),
        history: result.history.clone(),
        maps_link: maps_link(result),
        itinerary,
        food: result.food.clone(),
        greeting: greeting(result),
    }
}

/// First chat message after a successful analysis.
pub fn greeting(result: &GuideResult) -> String {
    format!(
        "Hello! I know all about {}. Ask me anything!",
        result.landmark_name
    )
}

fn maps_link(result: &GuideResult) -> String {
    let query = format!("{} {}", result.landmark_name, result.location);
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        encode(&query)
    )
}
