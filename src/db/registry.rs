use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::instance::Instance;
use super::target::Target;
use crate::config::ParsedOverrides;

/// Instances keyed by driver and base DSN, in first-seen order.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    by_key: HashMap<(String, String), usize>,
    instances: Vec<Arc<Instance>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the instance for `driver` and `base_dsn`, creating it on first
    /// request.
    pub fn get_or_create(&mut self, driver: &str, base_dsn: &str) -> Arc<Instance> {
        let key = (driver.to_string(), base_dsn.to_string());
        if let Some(&idx) = self.by_key.get(&key) {
            return Arc::clone(&self.instances[idx]);
        }
        let instance = Arc::new(Instance::new(driver, base_dsn));
        self.by_key.insert(key, self.instances.len());
        self.instances.push(Arc::clone(&instance));
        instance
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[Arc<Instance>] {
        &self.instances
    }
}

#[derive(Debug, Clone, Default)]
pub struct TargetList(Vec<Target>);

impl TargetList {
    pub fn new(targets: Vec<Target>) -> Self {
        Self(targets)
    }

    pub fn into_inner(self) -> Vec<Target> {
        self.0
    }

    /// Merge the same overrides into every target.
    pub fn merge_overrides(&mut self, overrides: Option<&ParsedOverrides>) {
        for target in &mut self.0 {
            target.merge_overrides(overrides);
        }
    }

    /// Assign every target a shared instance, so that targets on the same
    /// server with the same credentials point at one [`Instance`] regardless
    /// of schema. Any instance a target already held is replaced.
    pub fn set_instances(&mut self) -> InstanceRegistry {
        let mut registry = InstanceRegistry::new();
        for target in &mut self.0 {
            let instance = registry.get_or_create(&target.driver, &target.base_dsn());
            target.set_instance(instance);
        }
        tracing::debug!(
            targets = self.0.len(),
            instances = registry.len(),
            "hydrated instances"
        );
        registry
    }

    /// Indexes of the targets holding each registry instance.
    pub fn group_by_instance(&self, registry: &InstanceRegistry) -> Vec<Vec<usize>> {
        registry
            .instances()
            .iter()
            .map(|instance| {
                self.0
                    .iter()
                    .enumerate()
                    .filter(|(_, target)| {
                        target.has_instance() && Arc::ptr_eq(target.instance(), instance)
                    })
                    .map(|(idx, _)| idx)
                    .collect()
            })
            .collect()
    }
}

impl Deref for TargetList {
    type Target = [Target];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for TargetList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Target>> for TargetList {
    fn from(targets: Vec<Target>) -> Self {
        Self(targets)
    }
}

impl FromIterator<Target> for TargetList {
    fn from_iter<I: IntoIterator<Item = Target>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::target::DEFAULT_DRIVER;

    fn target(user: &str, schema: &str) -> Target {
        let mut target = Target::new(DEFAULT_DRIVER);
        target.host = "db1".to_string();
        target.user = user.to_string();
        target.password = "secret".to_string();
        target.schema = schema.to_string();
        target.merge_overrides(None);
        target
    }

    #[test]
    fn shares_instances_across_schemas() {
        let mut list = TargetList::new(vec![
            target("app", "shop"),
            target("app", "audit"),
            target("admin", "shop"),
        ]);
        let registry = list.set_instances();

        assert_eq!(registry.len(), 2);
        assert!(Arc::ptr_eq(list[0].instance(), list[1].instance()));
        assert!(!Arc::ptr_eq(list[0].instance(), list[2].instance()));
        assert_eq!(list.group_by_instance(&registry), vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn shared_instance_connects_each_schema() {
        let mut list = TargetList::new(vec![target("app", "shop"), target("app", "audit")]);
        list.set_instances();

        let shop = list[0].db().expect("shop");
        let audit = list[1].db().expect("audit");
        assert_eq!(shop.dsn, "app:secret@tcp(db1:3306)/shop");
        assert_eq!(audit.dsn, "app:secret@tcp(db1:3306)/audit");
        assert_eq!(list[0].instance().handle_count(), 2);
    }

    #[test]
    fn differing_port_or_password_is_a_separate_instance() {
        let mut other_port = target("app", "shop");
        other_port.port = 3307;
        let mut other_password = target("app", "shop");
        other_password.password = "other".to_string();

        let mut list = TargetList::new(vec![target("app", "shop"), other_port, other_password]);
        let registry = list.set_instances();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn differing_driver_is_a_separate_instance() {
        let mut other_driver = target("app", "shop");
        other_driver.driver = "mariadb".to_string();

        let mut list = TargetList::new(vec![target("app", "shop"), other_driver]);
        let registry = list.set_instances();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.instances()[1].driver(), "mariadb");
    }

    #[test]
    fn bulk_hydration_replaces_lazy_instances() {
        let mut list = TargetList::new(vec![target("app", "shop"), target("app", "audit")]);
        let lazy = Arc::clone(list[0].instance());
        assert!(!list[1].has_instance());

        list.set_instances();
        assert!(!Arc::ptr_eq(&lazy, list[0].instance()));
        assert!(Arc::ptr_eq(list[0].instance(), list[1].instance()));
    }

    #[test]
    fn registry_is_per_call() {
        let mut list = TargetList::new(vec![target("app", "shop")]);
        let first = list.set_instances();
        let second = list.set_instances();
        assert!(!Arc::ptr_eq(&first.instances()[0], &second.instances()[0]));
        assert!(Arc::ptr_eq(list[0].instance(), &second.instances()[0]));
    }

    #[test]
    fn empty_list_builds_empty_registry() {
        let mut list = TargetList::default();
        assert!(list.set_instances().is_empty());
    }

    #[test]
    fn merge_applies_to_every_target() {
        let mut list: TargetList = vec![Target::new(DEFAULT_DRIVER), Target::new(DEFAULT_DRIVER)]
            .into_iter()
            .collect();
        let cli = ParsedOverrides {
            host: "cli-host:3307".to_string(),
            ..ParsedOverrides::default()
        };
        list.merge_overrides(Some(&cli));
        for target in &list {
            assert_eq!(target.host, "cli-host");
            assert_eq!(target.port, 3307);
            assert_eq!(target.user, "root");
        }
    }
}
