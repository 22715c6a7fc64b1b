// Editable dashboard form state and submission validation
use super::dashboard::{BucketDraft, Dashboard, DashboardDraft};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Dashboard name is required")]
    MissingName,

    #[error("At least one package name is required")]
    MissingPackageNames,

    #[error("At least one bucket is required")]
    MissingBuckets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketField {
    Name,
    Description,
}

/// A single edit applied to the form's ordered lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FormAction {
    AddPackageName,
    RemovePackageName { index: usize },
    UpdatePackageName { index: usize, value: String },
    AddBucket,
    RemoveBucket { index: usize },
    UpdateBucket { index: usize, field: BucketField, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub package_names: Vec<String>,
    #[serde(default)]
    pub buckets: Vec<BucketInput>,
}

impl Default for DashboardForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            package_names: vec![String::new()],
            buckets: vec![BucketInput::default()],
        }
    }
}

impl DashboardForm {
    /// Seed a form from a stored dashboard, keeping one blank slot in empty lists.
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        let mut form = Self {
            name: dashboard.name.clone(),
            description: dashboard.description.clone(),
            package_names: dashboard.package_names.clone(),
            buckets: dashboard
                .buckets
                .iter()
                .map(|b| BucketInput {
                    id: Some(b.id.clone()),
                    name: b.name.clone(),
                    description: b.description.clone(),
                })
                .collect(),
        };
        form.ensure_slots();
        form
    }

    fn ensure_slots(&mut self) {
        if self.package_names.is_empty() {
            self.package_names.push(String::new());
        }
        if self.buckets.is_empty() {
            self.buckets.push(BucketInput::default());
        }
    }

    pub fn add_package_name(&mut self) {
        self.package_names.push(String::new());
    }

    /// Removes the entry unless it is the last one left.
    pub fn remove_package_name(&mut self, index: usize) {
        if self.package_names.len() > 1 && index < self.package_names.len() {
            self.package_names.remove(index);
        }
    }

    pub fn update_package_name(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.package_names.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn add_bucket(&mut self) {
        self.buckets.push(BucketInput::default());
    }

    /// Removes the bucket unless it is the last one left.
    pub fn remove_bucket(&mut self, index: usize) {
        if self.buckets.len() > 1 && index < self.buckets.len() {
            self.buckets.remove(index);
        }
    }

    pub fn update_bucket(&mut self, index: usize, field: BucketField, value: impl Into<String>) {
        if let Some(bucket) = self.buckets.get_mut(index) {
            match field {
                BucketField::Name => bucket.name = value.into(),
                BucketField::Description => bucket.description = value.into(),
            }
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::AddPackageName => self.add_package_name(),
            FormAction::RemovePackageName { index } => self.remove_package_name(index),
            FormAction::UpdatePackageName { index, value } => self.update_package_name(index, value),
            FormAction::AddBucket => self.add_bucket(),
            FormAction::RemoveBucket { index } => self.remove_bucket(index),
            FormAction::UpdateBucket { index, field, value } => {
                self.update_bucket(index, field, value)
            }
        }
    }

    /// Check the submission rules in order and build the draft to persist.
    /// Blank entries are dropped and kept values are trimmed.
    pub fn validate(&self) -> Result<DashboardDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let package_names: Vec<String> = self
            .package_names
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if package_names.is_empty() {
            return Err(ValidationError::MissingPackageNames);
        }

        let buckets: Vec<BucketDraft> = self
            .buckets
            .iter()
            .filter(|b| !b.name.trim().is_empty())
            .map(|b| BucketDraft {
                id: b.id.clone(),
                name: b.name.trim().to_string(),
                description: b.description.trim().to_string(),
            })
            .collect();
        if buckets.is_empty() {
            return Err(ValidationError::MissingBuckets);
        }

        Ok(DashboardDraft {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            package_names,
            buckets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Bucket;
    use chrono::Utc;

    fn filled_form() -> DashboardForm {
        DashboardForm {
            name: "Games".to_string(),
            description: "desc".to_string(),
            package_names: vec!["com.example.game".to_string()],
            buckets: vec![BucketInput {
                id: None,
                name: "Crashes".to_string(),
                description: String::new(),
            }],
        }
    }

    #[test]
    fn test_from_dashboard_seeds_blank_slots() {
        let dashboard = Dashboard {
            id: "9".to_string(),
            name: "Empty".to_string(),
            description: String::new(),
            package_names: vec![],
            buckets: vec![],
            reviews: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let form = DashboardForm::from_dashboard(&dashboard);
        assert_eq!(form.package_names, vec![String::new()]);
        assert_eq!(form.buckets, vec![BucketInput::default()]);
    }

    #[test]
    fn test_from_dashboard_keeps_bucket_ids() {
        let dashboard = Dashboard {
            id: "1".to_string(),
            name: "Games".to_string(),
            description: String::new(),
            package_names: vec!["com.a.b".to_string()],
            buckets: vec![Bucket::new("7", "Perf", "Speed")],
            reviews: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let form = DashboardForm::from_dashboard(&dashboard);
        assert_eq!(form.buckets[0].id.as_deref(), Some("7"));
        assert_eq!(form.package_names, vec!["com.a.b".to_string()]);
    }

    #[test]
    fn test_remove_last_package_is_noop() {
        let mut form = DashboardForm::default();
        form.remove_package_name(0);
        assert_eq!(form.package_names.len(), 1);

        form.add_package_name();
        form.update_package_name(1, "com.second");
        form.remove_package_name(0);
        assert_eq!(form.package_names, vec!["com.second".to_string()]);
    }

    #[test]
    fn test_remove_last_bucket_is_noop() {
        let mut form = DashboardForm::default();
        form.remove_bucket(0);
        assert_eq!(form.buckets.len(), 1);

        form.add_bucket();
        form.remove_bucket(5);
        assert_eq!(form.buckets.len(), 2);
    }

    #[test]
    fn test_apply_actions() {
        let mut form = DashboardForm::default();
        form.apply(FormAction::UpdatePackageName { index: 0, value: "com.a".to_string() });
        form.apply(FormAction::AddBucket);
        form.apply(FormAction::UpdateBucket {
            index: 1,
            field: BucketField::Description,
            value: "Slow screens".to_string(),
        });

        assert_eq!(form.package_names[0], "com.a");
        assert_eq!(form.buckets[1].description, "Slow screens");
        assert_eq!(form.buckets[1].name, "");
    }

    #[test]
    fn test_form_action_deserialize() {
        let action: FormAction =
            serde_json::from_str(r#"{"type":"updateBucket","index":0,"field":"name","value":"UX"}"#)
                .unwrap();
        assert_eq!(
            action,
            FormAction::UpdateBucket { index: 0, field: BucketField::Name, value: "UX".to_string() }
        );

        let action: FormAction = serde_json::from_str(r#"{"type":"addPackageName"}"#).unwrap();
        assert_eq!(action, FormAction::AddPackageName);
    }

    #[test]
    fn test_validate_missing_name() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_validate_missing_package_names() {
        let mut form = filled_form();
        form.package_names = vec![" ".to_string(), String::new()];
        assert_eq!(form.validate(), Err(ValidationError::MissingPackageNames));
    }

    #[test]
    fn test_validate_missing_buckets() {
        let mut form = filled_form();
        form.buckets[0].name = "\t".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingBuckets));
    }

    #[test]
    fn test_validate_name_checked_first() {
        let form = DashboardForm::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_validate_trims_and_drops_blanks() {
        let mut form = filled_form();
        form.name = "  Games  ".to_string();
        form.package_names.push("   ".to_string());
        form.package_names.push(" com.other ".to_string());
        form.add_bucket();

        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "Games");
        assert_eq!(draft.package_names, vec!["com.example.game".to_string(), "com.other".to_string()]);
        assert_eq!(draft.buckets.len(), 1);
        assert_eq!(draft.buckets[0].name, "Crashes");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingName.to_string(), "Dashboard name is required");
        assert_eq!(
            ValidationError::MissingPackageNames.to_string(),
            "At least one package name is required"
        );
        assert_eq!(ValidationError::MissingBuckets.to_string(), "At least one bucket is required");
    }
}
