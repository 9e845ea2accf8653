//! Which records are open for editing

/// Ids of the records currently being edited
///
/// Product, option and promotion ids only make sense inside the selected
/// tenant, so switching tenants clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditingContext {
    tenant: Option<String>,
    product: Option<i64>,
    option: Option<i64>,
    promotion: Option<i64>,
}

impl EditingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    pub fn product(&self) -> Option<i64> {
        self.product
    }

    pub fn option(&self) -> Option<i64> {
        self.option
    }

    pub fn promotion(&self) -> Option<i64> {
        self.promotion
    }

    pub fn begin_tenant(&mut self, tenant_id: impl Into<String>) {
        let tenant_id = tenant_id.into();
        if self.tenant.as_deref() != Some(tenant_id.as_str()) {
            self.product = None;
            self.option = None;
            self.promotion = None;
        }
        self.tenant = Some(tenant_id);
    }

    pub fn begin_product(&mut self, id: i64) {
        self.product = Some(id);
    }

    pub fn begin_option(&mut self, id: i64) {
        self.option = Some(id);
    }

    pub fn begin_promotion(&mut self, id: i64) {
        self.promotion = Some(id);
    }

    /// Leave the tenant and everything opened inside it
    pub fn clear_tenant(&mut self) {
        *self = Self::default();
    }

    pub fn clear_product(&mut self) {
        self.product = None;
    }

    pub fn clear_option(&mut self) {
        self.option = None;
    }

    pub fn clear_promotion(&mut self) {
        self.promotion = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_tenant_clears_nested_ids() {
        let mut ctx = EditingContext::new();
        ctx.begin_tenant("loja-a");
        ctx.begin_promotion(7);
        ctx.begin_option(3);

        ctx.begin_tenant("loja-a");
        assert_eq!(ctx.promotion(), Some(7));

        ctx.begin_tenant("loja-b");
        assert_eq!(ctx.tenant(), Some("loja-b"));
        assert_eq!(ctx.promotion(), None);
        assert_eq!(ctx.option(), None);
    }

    #[test]
    fn test_clear_one_keeps_others() {
        let mut ctx = EditingContext::new();
        ctx.begin_tenant("loja-a");
        ctx.begin_product(1);
        ctx.begin_promotion(2);

        ctx.clear_promotion();
        assert_eq!(ctx.product(), Some(1));
        assert_eq!(ctx.promotion(), None);

        ctx.clear_tenant();
        assert_eq!(ctx, EditingContext::default());
    }
}
