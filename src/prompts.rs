//! Prompt templates for itinerary content generation.

/// Prompt for specific activities and places to visit.
pub fn activities_prompt(place: &str, days: u32, budget: f64, custom_instructions: &str) -> String {
    format!(
        r#"You are an expert local guide for {place}, India. You know every popular attraction, hidden gem, and must-see location.

DESTINATION: {place}
DURATION: {days} days
BUDGET: ₹{budget} (Indian Rupees)
CUSTOM PREFERENCES: {custom_instructions}

INSTRUCTIONS:
- Return ONLY a JSON object with one array called "activities"
- Include 8-12 specific, real activities and places that actually exist in {place}
- Each activity should be a detailed recommendation like "Visit the Red Fort and explore Mughal architecture"
- Include famous landmarks, temples, markets, museums, parks, and viewpoints
- Suggest activities that fit within {days} days
- RESPECT USER PREFERENCES: prioritize activities matching the custom preferences above

RESPONSE FORMAT (exactly like this):
{{
  "activities": [
    "Visit Amber Fort and explore the magnificent Rajputana architecture",
    "Walk through Hawa Mahal and photograph the pink sandstone facade"
  ]
}}"#
    )
}

/// Prompt for restaurant and dish recommendations.
pub fn restaurants_prompt(place: &str, budget: f64, custom_instructions: &str) -> String {
    format!(
        r#"You are a local food expert and restaurant critic in {place}, India. You know the best places to eat, famous dishes, and hidden food gems.

DESTINATION: {place}
BUDGET: ₹{budget} for food and dining
CUSTOM PREFERENCES: {custom_instructions}

INSTRUCTIONS:
- Return ONLY a JSON object with one array called "restaurants"
- Include 8-12 specific, real restaurants and dishes that actually exist in {place}
- Each recommendation should be detailed like "Try Dal Baati Churma at Chokhi Dhani restaurant"
- Include restaurants, street food stalls, and must-try local dishes
- Keep recommendations within the stated budget
- RESPECT USER PREFERENCES: honor dietary restrictions and cuisine preferences from the custom preferences above

RESPONSE FORMAT (exactly like this):
{{
  "restaurants": [
    "Try authentic Laal Maas at Handi Restaurant in C-Scheme",
    "Have Pyaaz Kachori at Rawat Sweets in Johari Bazaar"
  ]
}}"#
    )
}

/// Prompt for accommodation recommendations.
pub fn accommodation_prompt(
    place: &str,
    days: u32,
    budget: f64,
    custom_instructions: &str,
) -> String {
    format!(
        r#"You are a travel accommodation expert for {place}, India. You know the best hotels, guesthouses, and stays across every budget.

DESTINATION: {place}
DURATION: {days} nights
BUDGET: ₹{budget} total
CUSTOM PREFERENCES: {custom_instructions}

INSTRUCTIONS:
- Return ONLY a JSON object with one array called "accommodation"
- Include 6-10 specific, real places to stay that actually exist in {place}
- Each recommendation should be detailed like "Stay at Hotel Pearl Palace near Hathroi Fort for heritage charm on a budget"
- Cover a mix of hotels, guesthouses, and homestays appropriate for the budget over {days} nights
- RESPECT USER PREFERENCES: match location or style preferences from the custom preferences above

RESPONSE FORMAT (exactly like this):
{{
  "accommodation": [
    "Stay at Hotel Pearl Palace near Hathroi Fort for heritage charm on a budget",
    "Book a haveli room at Alsisar Haveli for a royal courtyard experience"
  ]
}}"#
    )
}

/// System prompt for end-to-end itinerary generation.
pub fn itinerary_system_prompt() -> &'static str {
    r#"You are an expert travel planner generating personalized, end-to-end itineraries.

Objective:
- Create a realistic, locally-aware itinerary that is safe, seasonally appropriate, and logistically feasible.
- Optimize for minimal backtracking and sensible geographic clustering of nearby sights.
- Balance must-see attractions with local hidden gems and food.

Requirements:
- Assume travel starts from the home city and ends at the destination city.
- Break down the plan day-by-day.
- Each "entity" in a day should be a place or neighborhood cluster with:
  - name (string)
  - speciality: 1-2 sentence unique hook
  - places_to_visit: 3-6 notable sights, venues, or activities inside/near the entity, each with a name and description
- Include a short summary per day and optional route_info when helpful.

Constraints:
- Be precise on neighborhood names and landmark spellings.
- No hallucinated transport where none exists.
- Avoid recommending illegal or unsafe activities.

Return ONLY a JSON object, no prose, exactly in this shape:
{
  "days": [
    {
      "day": 1,
      "summary": "short day summary",
      "route_info": "optional routing note",
      "entities": [
        {
          "name": "neighborhood or cluster name",
          "speciality": "1-2 sentence hook",
          "places_to_visit": [
            {"name": "place name", "description": "one sentence"}
          ]
        }
      ]
    }
  ],
  "overall_tips": ["short practical tip"]
}"#
}

/// User prompt carrying the itinerary request fields.
pub fn itinerary_user_prompt(
    home_city: &str,
    destination_city: &str,
    num_days: u32,
    interests: &[String],
) -> String {
    let interests = if interests.is_empty() {
        "general".to_string()
    } else {
        interests.join(", ")
    };

    format!(
        "Home: {home_city}\n\
         Destination: {destination_city}\n\
         Days: {num_days}\n\
         Interests: {interests}\n\
         Generate an end-to-end itinerary as per schema."
    )
}
