use reqwest::Method;

use crate::models::{FirewallRule, FirewallRuleSet};
use crate::{MerakiClient, MerakiResult};

/// The layer 3 firewall of an appliance network, with its rule list
/// cached.
///
/// The dashboard reads and writes the rule list as a whole, so adding a
/// rule is a read-modify-write: the cached list with the new rule appended
/// is PUT back, then re-fetched.
pub struct L3Firewall {
    client: MerakiClient,
    network_id: String,
    rules: Vec<FirewallRule>,
}

impl L3Firewall {
    pub(crate) async fn connect(client: &MerakiClient, network_id: &str) -> MerakiResult<Self> {
        let rules = Self::fetch_rules(client, network_id).await?;
        Ok(Self {
            client: client.clone(),
            network_id: network_id.to_string(),
            rules,
        })
    }

    async fn fetch_rules(
        client: &MerakiClient,
        network_id: &str,
    ) -> MerakiResult<Vec<FirewallRule>> {
        let endpoint = format!("networks/{network_id}/appliance/firewall/l3FirewallRules");
        let set: FirewallRuleSet = client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(set.rules)
    }

    /// The cached rule list, in evaluation order.
    pub fn rules(&self) -> &[FirewallRule] {
        &self.rules
    }

    /// Re-fetches the rule list from the dashboard.
    pub async fn refresh(&mut self) -> MerakiResult<()> {
        self.rules = Self::fetch_rules(&self.client, &self.network_id).await?;
        Ok(())
    }

    /// Appends a rule to the list and writes the whole list back, then
    /// re-fetches it so the snapshot matches the server.
    pub async fn add_rule(&mut self, rule: FirewallRule) -> MerakiResult<()> {
        let mut rules = self.rules.clone();
        rules.push(rule);

        let endpoint = format!("networks/{}/appliance/firewall/l3FirewallRules", self.network_id);
        let set = FirewallRuleSet { rules };
        self.client.request_status(Method::PUT, &endpoint, Some(&set)).await?;
        self.refresh().await
    }
}
