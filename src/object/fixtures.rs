//! Small registry with shapes the OWS table does not use

use once_cell::sync::Lazy;

use super::ObjectRef;
use crate::metadata::{ContentKind, DataType, Occurs, Registry, RegistryBuilder};

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut b = RegistryBuilder::new("urn:test:lists");
    b.class("ListType", ContentKind::ElementOnly)
        .element("item", "Item", DataType::String, Occurs::zero_or_more())
        .element("label", "Label", DataType::String, Occurs::optional());
    b.build().unwrap()
});

pub(crate) const ITEM: usize = 0;

pub(crate) fn list_object() -> ObjectRef {
    REGISTRY.create("ListType").unwrap()
}
