use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a firewall rule allows or denies matching traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulePolicy {
    Allow,
    Deny,
}

/// Protocol matched by a firewall rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleProtocol {
    Tcp,
    Udp,
    Icmp,
    Icmp6,
    Any,
}

/// A layer 3 firewall rule.
///
/// Port and CIDR fields are comma-separated lists, or `"any"`. Destination
/// CIDRs additionally accept fully-qualified domain names; source CIDRs do
/// not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRule {
    /// Description of the rule.
    #[serde(default)]
    pub comment: String,

    /// Whether matching traffic is allowed or denied.
    pub policy: RulePolicy,

    /// Protocol to match.
    pub protocol: RuleProtocol,

    /// Source port(s), or "any".
    pub src_port: String,

    /// Source CIDR(s), or "any".
    pub src_cidr: String,

    /// Destination port(s), or "any".
    pub dest_port: String,

    /// Destination CIDR(s) or FQDN(s), or "any".
    pub dest_cidr: String,

    /// Whether matching traffic is reported to the configured syslog server.
    #[serde(default)]
    pub syslog_enabled: bool,
}

impl FirewallRule {
    /// Create a firewall rule builder. Every field defaults to the vendor's
    /// catch-all (`deny any any`), with syslog off.
    pub fn builder() -> FirewallRuleBuilder {
        FirewallRuleBuilder::default()
    }
}

impl fmt::Display for FirewallRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} {}:{} -> {}:{}",
            self.policy, self.protocol, self.src_cidr, self.src_port, self.dest_cidr, self.dest_port
        )
    }
}

/// Builder for [`FirewallRule`].
pub struct FirewallRuleBuilder {
    rule: FirewallRule,
}

impl Default for FirewallRuleBuilder {
    fn default() -> Self {
        Self {
            rule: FirewallRule {
                comment: String::new(),
                policy: RulePolicy::Deny,
                protocol: RuleProtocol::Any,
                src_port: "any".to_string(),
                src_cidr: "any".to_string(),
                dest_port: "any".to_string(),
                dest_cidr: "any".to_string(),
                syslog_enabled: false,
            },
        }
    }
}

impl FirewallRuleBuilder {
    /// Set the rule description.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.rule.comment = comment.into();
        self
    }

    /// Set whether matching traffic is allowed or denied.
    pub fn policy(mut self, policy: RulePolicy) -> Self {
        self.rule.policy = policy;
        self
    }

    /// Set the protocol to match.
    pub fn protocol(mut self, protocol: RuleProtocol) -> Self {
        self.rule.protocol = protocol;
        self
    }

    /// Set the source port(s).
    pub fn src_port(mut self, src_port: impl Into<String>) -> Self {
        self.rule.src_port = src_port.into();
        self
    }

    /// Set the source CIDR(s).
    pub fn src_cidr(mut self, src_cidr: impl Into<String>) -> Self {
        self.rule.src_cidr = src_cidr.into();
        self
    }

    /// Set the destination port(s).
    pub fn dest_port(mut self, dest_port: impl Into<String>) -> Self {
        self.rule.dest_port = dest_port.into();
        self
    }

    /// Set the destination CIDR(s) or FQDN(s).
    pub fn dest_cidr(mut self, dest_cidr: impl Into<String>) -> Self {
        self.rule.dest_cidr = dest_cidr.into();
        self
    }

    /// Set whether matching traffic is reported to syslog.
    pub fn syslog_enabled(mut self, enabled: bool) -> Self {
        self.rule.syslog_enabled = enabled;
        self
    }

    pub fn build(self) -> FirewallRule {
        self.rule
    }
}

/// Envelope the dashboard uses for reading and writing the L3 rule list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallRuleSet {
    /// The ordered rule list.
    pub rules: Vec<FirewallRule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_defaults_to_deny_any() {
        let rule = FirewallRule::builder().build();
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "comment": "",
                "policy": "deny",
                "protocol": "any",
                "srcPort": "any",
                "srcCidr": "any",
                "destPort": "any",
                "destCidr": "any",
                "syslogEnabled": false
            })
        );
    }

    #[test]
    fn rule_round_trips_vendor_field_names() {
        let json = serde_json::json!({
            "comment": "block guest to corp",
            "policy": "deny",
            "protocol": "tcp",
            "srcPort": "any",
            "srcCidr": "10.20.0.0/24",
            "destPort": "443",
            "destCidr": "10.0.0.0/16",
            "syslogEnabled": true
        });

        let rule: FirewallRule = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(rule.policy, RulePolicy::Deny);
        assert_eq!(rule.protocol, RuleProtocol::Tcp);
        assert_eq!(serde_json::to_value(&rule).unwrap(), json);
    }
}
