mod tax_form;

pub use tax_form::TaxFormModel;
