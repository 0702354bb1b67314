use std::collections::HashMap;

/// Maps a smart meter id to the price plan the account is subscribed to.
///
/// Display-only: cost computation never depends on the subscribed plan.
pub struct AccountService {
    smart_meter_to_price_plan: HashMap<String, String>,
}

impl AccountService {
    pub fn new(smart_meter_to_price_plan: HashMap<String, String>) -> Self {
        Self {
            smart_meter_to_price_plan,
        }
    }

    pub fn price_plan_id_for(&self, smart_meter_id: &str) -> Option<String> {
        self.smart_meter_to_price_plan.get(smart_meter_id).cloned()
    }

    pub fn smart_meter_ids(&self) -> impl Iterator<Item = &str> {
        self.smart_meter_to_price_plan.keys().map(String::as_str)
    }
}
