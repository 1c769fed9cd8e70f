//! In-progress invoice: package choice, feature selection and totals.

use uuid::Uuid;

use crate::models::invoice::{NewInvoice, DEFAULT_GST_PERCENTAGE};
use crate::models::Package;
use crate::services::invoicing::InvoiceError;
use crate::services::pricing;

/// Customer fields collected by the invoice form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Invoice being composed before submission.
///
/// Choosing a package selects all of its features; individual features can
/// then be toggled off and on. The selection always follows the package's
/// feature order.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub customer: CustomerDetails,
    pub gst_percentage: f64,
    pub notes: Option<String>,
    package: Option<Package>,
    selected_features: Vec<String>,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            customer: CustomerDetails::default(),
            gst_percentage: DEFAULT_GST_PERCENTAGE,
            notes: None,
            package: None,
            selected_features: Vec::new(),
        }
    }
}

impl InvoiceDraft {
    pub fn new(customer: CustomerDetails) -> Self {
        Self {
            customer,
            ..Default::default()
        }
    }

    pub fn package(&self) -> Option<&Package> {
        self.package.as_ref()
    }

    pub fn selected_features(&self) -> &[String] {
        &self.selected_features
    }

    /// Selects a package and resets the selection to all of its features.
    /// Selecting the package that is already selected changes nothing.
    pub fn select_package(&mut self, package: Package) {
        if self.package.as_ref().map(|p| p.id) == Some(package.id) {
            return;
        }
        self.selected_features = package.distinct_features();
        self.package = Some(package);
    }

    /// Flips one feature. Returns whether the feature is selected afterwards.
    /// Features outside the chosen package are ignored.
    pub fn toggle_feature(&mut self, feature: &str) -> bool {
        if let Some(pos) = self.selected_features.iter().position(|f| f == feature) {
            self.selected_features.remove(pos);
            return false;
        }

        let Some(package) = self.package.as_ref() else {
            return false;
        };
        let Some(rank) = package.feature_position(feature) else {
            return false;
        };

        let insert_at = self
            .selected_features
            .iter()
            .position(|f| package.feature_position(f).map_or(false, |r| r > rank))
            .unwrap_or(self.selected_features.len());
        self.selected_features.insert(insert_at, feature.to_string());
        true
    }

    /// Replaces the selection with an explicit subset of the package features.
    /// Duplicates are collapsed and the package order is kept.
    pub fn set_selected_features(&mut self, features: &[String]) -> Result<(), InvoiceError> {
        let package = self.package.as_ref().ok_or(InvoiceError::MissingPackage)?;

        if let Some(unknown) = features.iter().find(|f| !package.has_feature(f)) {
            return Err(InvoiceError::UnknownFeature(unknown.clone()));
        }

        self.selected_features = package
            .distinct_features()
            .into_iter()
            .filter(|f| features.contains(f))
            .collect();
        Ok(())
    }

    /// Tax-inclusive total, once a package is chosen.
    pub fn total_amount(&self) -> Option<f64> {
        self.package
            .as_ref()
            .map(|p| pricing::total_amount(p.price_inr, self.gst_percentage))
    }

    /// Checks the draft can be submitted and returns the chosen package.
    pub fn validate(&self) -> Result<&Package, InvoiceError> {
        if shared::validation::is_blank(&self.customer.name)
            || shared::validation::is_blank(&self.customer.email)
        {
            return Err(InvoiceError::MissingCustomer);
        }
        let package = self.package.as_ref().ok_or(InvoiceError::MissingPackage)?;
        shared::validation::validate_percentage(self.gst_percentage)
            .map_err(|_| InvoiceError::InvalidGst(self.gst_percentage))?;
        Ok(package)
    }

    /// Builds the insert payload for a valid draft.
    pub fn to_new_invoice(&self, created_by: Option<Uuid>) -> Result<NewInvoice, InvoiceError> {
        let package = self.validate()?;

        Ok(NewInvoice {
            customer_name: self.customer.name.trim().to_string(),
            customer_email: self.customer.email.trim().to_string(),
            customer_phone: shared::validation::non_blank(self.customer.phone.as_deref()),
            customer_company: shared::validation::non_blank(self.customer.company.as_deref()),
            package_id: package.id,
            selected_features: self.selected_features.clone(),
            gst_percentage: self.gst_percentage,
            notes: shared::validation::non_blank(self.notes.as_deref()),
            total_amount: pricing::total_amount(package.price_inr, self.gst_percentage),
            created_by,
        })
    }
}
