use crate::calendar::Calendar;
use crate::config::GeneratorConfig;
use crate::sampler::Sampler;

/// One row of the web traffic fact table.
#[derive(Debug, Clone, PartialEq)]
pub struct WebSession {
    pub session_id: u32,
    /// Anonymous sessions carry no customer key.
    pub customer_id: Option<u32>,
    pub date_id: u32,
    pub pages_viewed: u32,
    pub duration_seconds: u32,
    pub purchased: bool,
    pub cart_abandoned: bool,
}

/// Build the web session fact table. Days are picked uniformly; unlike
/// sales, traffic carries no seasonal weighting.
pub fn generate(
    config: &GeneratorConfig,
    calendar: &Calendar,
    sampler: &mut Sampler,
) -> Vec<WebSession> {
    let mut sessions = Vec::with_capacity(config.web_sessions as usize);

    for session_id in 1..=config.web_sessions {
        let date_id = sampler.int_between(1, calendar.len() as i64) as u32;
        let customer_id = if sampler.chance(0.5) {
            Some(sampler.int_between(1, config.customers as i64) as u32)
        } else {
            None
        };
        let pages_viewed = sampler.poisson(3.0) as u32 + 1;
        let duration_seconds = sampler.exponential(180.0) as u32;
        let purchased = sampler.chance(0.5);
        // A cart can only be abandoned when the session did not convert.
        let cart_abandoned = !purchased && sampler.chance(0.3);

        sessions.push(WebSession {
            session_id,
            customer_id,
            date_id,
            pages_viewed,
            duration_seconds,
            purchased,
            cart_abandoned,
        });
    }

    sessions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<WebSession> {
        let config = GeneratorConfig {
            customers: 100,
            web_sessions: 5000,
            ..GeneratorConfig::default()
        };
        let calendar = Calendar::build(config.start_date, config.end_date);
        generate(&config, &calendar, &mut Sampler::new(config.seed))
    }

    #[test]
    fn abandoned_cart_implies_no_purchase() {
        for session in fixture() {
            if session.cart_abandoned {
                assert!(!session.purchased);
            }
        }
    }

    #[test]
    fn every_session_views_at_least_one_page() {
        for session in fixture() {
            assert!(session.pages_viewed >= 1);
        }
    }

    #[test]
    fn roughly_half_of_sessions_are_anonymous() {
        let sessions = fixture();
        let anonymous = sessions.iter().filter(|s| s.customer_id.is_none()).count();
        let share = anonymous as f64 / sessions.len() as f64;
        assert!((0.45..=0.55).contains(&share), "share {share}");
    }
}
