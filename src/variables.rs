//! Well-known AL objects and the variable names they are usually declared as.

use crate::data_type::DataType;

/// One well-known object and its conventional variable names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableEntry {
    /// Object name as declared in the base application (`G/L Account`).
    pub object_name: String,
    /// Full variable name (`GLAccount`).
    pub long_name: String,
    /// Abbreviated variable name (`GLAcc`).
    pub short_name: String,
    /// Object type keyword (`Record`, `Codeunit`).
    pub object_type: String,
    /// Human readable name shown in quick fixes.
    pub display_name: String,
}

impl VariableEntry {
    #[must_use]
    pub fn new(
        object_name: &str,
        long_name: &str,
        short_name: &str,
        object_type: &str,
        display_name: &str,
    ) -> Self {
        Self {
            object_name: object_name.to_string(),
            long_name: long_name.to_string(),
            short_name: short_name.to_string(),
            object_type: object_type.to_string(),
            display_name: display_name.to_string(),
        }
    }

    /// The declared type of a variable for this object.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        DataType::object(&self.object_type, &self.object_name)
    }
}

/// (object name, long name, short name, object type, display name)
const BUILTIN_ENTRIES: &[(&str, &str, &str, &str, &str)] = &[
    ("Item", "Item", "Item", "Record", "Item"),
    ("Customer", "Customer", "Cust", "Record", "Customer"),
    ("Vendor", "Vendor", "Vend", "Record", "Vendor"),
    ("G/L Account", "GLAccount", "GLAcc", "Record", "G/L Account"),
    ("G/L Entry", "GLEntry", "GLEntry", "Record", "G/L Entry"),
    ("Sales Header", "SalesHeader", "SalesHeader", "Record", "Sales Header"),
    ("Sales Line", "SalesLine", "SalesLine", "Record", "Sales Line"),
    ("Purchase Header", "PurchaseHeader", "PurchHeader", "Record", "Purchase Header"),
    ("Purchase Line", "PurchaseLine", "PurchLine", "Record", "Purchase Line"),
    ("Sales Invoice Header", "SalesInvoiceHeader", "SalesInvHeader", "Record", "Sales Invoice Header"),
    ("Sales Invoice Line", "SalesInvoiceLine", "SalesInvLine", "Record", "Sales Invoice Line"),
    ("Item Ledger Entry", "ItemLedgerEntry", "ItemLedgEntry", "Record", "Item Ledger Entry"),
    ("Cust. Ledger Entry", "CustLedgerEntry", "CustLedgEntry", "Record", "Customer Ledger Entry"),
    ("Vendor Ledger Entry", "VendorLedgerEntry", "VendLedgEntry", "Record", "Vendor Ledger Entry"),
    ("Gen. Journal Line", "GenJournalLine", "GenJnlLine", "Record", "General Journal Line"),
    ("Item Journal Line", "ItemJournalLine", "ItemJnlLine", "Record", "Item Journal Line"),
    ("Company Information", "CompanyInformation", "CompanyInfo", "Record", "Company Information"),
    ("General Ledger Setup", "GeneralLedgerSetup", "GLSetup", "Record", "General Ledger Setup"),
    ("Sales & Receivables Setup", "SalesReceivablesSetup", "SalesSetup", "Record", "Sales & Receivables Setup"),
    ("Purchases & Payables Setup", "PurchasesPayablesSetup", "PurchSetup", "Record", "Purchases & Payables Setup"),
    ("Inventory Setup", "InventorySetup", "InvtSetup", "Record", "Inventory Setup"),
    ("Location", "Location", "Location", "Record", "Location"),
    ("Dimension Value", "DimensionValue", "DimValue", "Record", "Dimension Value"),
    ("Currency", "Currency", "Currency", "Record", "Currency"),
    ("Gen. Jnl.-Post Line", "GenJnlPostLine", "GenJnlPostLine", "Codeunit", "Gen. Jnl.-Post Line"),
    ("Item Jnl.-Post Line", "ItemJnlPostLine", "ItemJnlPostLine", "Codeunit", "Item Jnl.-Post Line"),
    ("Sales-Post", "SalesPost", "SalesPost", "Codeunit", "Sales-Post"),
    ("Purch.-Post", "PurchPost", "PurchPost", "Codeunit", "Purch.-Post"),
    ("DimensionManagement", "DimensionManagement", "DimMgt", "Codeunit", "Dimension Management"),
    ("Temp Blob", "TempBlob", "TempBlob", "Codeunit", "Temp Blob"),
];

/// Immutable lookup table built once at startup and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    /// Table rows in declaration order.
    entries: Vec<VariableEntry>,
}

impl VariableTable {
    #[must_use]
    pub const fn new(entries: Vec<VariableEntry>) -> Self {
        Self { entries }
    }

    /// The table shipped with the server.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(object, long, short, kind, display)| {
                VariableEntry::new(object, long, short, kind, display)
            })
            .collect();
        Self::new(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[VariableEntry] {
        &self.entries
    }

    /// Looks an entry up by long name, falling back to the short name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&VariableEntry> {
        self.entries
            .iter()
            .find(|entry| entry.long_name == name)
            .or_else(|| self.entries.iter().find(|entry| entry.short_name == name))
    }

    /// Whether `name` is a known long or short variable name.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.long_name == name || entry.short_name == name)
    }

    /// `"<ObjectType> <ObjectName>"` for `name`, or an empty string when unknown.
    #[must_use]
    pub fn type_and_name_for(&self, name: &str) -> String {
        self.find(name).map(|entry| entry.data_type().render()).unwrap_or_default()
    }
}
