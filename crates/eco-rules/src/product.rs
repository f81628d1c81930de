use eco_types::KeywordTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse product family inferred from a title, used to scope rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductClass {
    Book,
    Phone,
    Laptop,
    SmallAccessory,
    Clothing,
    Furniture,
}

impl ProductClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductClass::Book => "book",
            ProductClass::Phone => "phone",
            ProductClass::Laptop => "laptop",
            ProductClass::SmallAccessory => "small_accessory",
            ProductClass::Clothing => "clothing",
            ProductClass::Furniture => "furniture",
        }
    }
}

impl fmt::Display for ProductClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Longer keywords win, so "phone case" is an accessory, not a phone.
pub(crate) const PRODUCT_KEYWORDS: &[(&str, ProductClass)] = &[
    ("book", ProductClass::Book),
    ("paperback", ProductClass::Book),
    ("hardcover", ProductClass::Book),
    ("novel", ProductClass::Book),
    ("notebook", ProductClass::Book),
    ("phone", ProductClass::Phone),
    ("smartphone", ProductClass::Phone),
    ("iphone", ProductClass::Phone),
    ("mobile phone", ProductClass::Phone),
    ("galaxy s", ProductClass::Phone),
    ("pixel", ProductClass::Phone),
    ("laptop", ProductClass::Laptop),
    ("notebook computer", ProductClass::Laptop),
    ("macbook", ProductClass::Laptop),
    ("chromebook", ProductClass::Laptop),
    ("ultrabook", ProductClass::Laptop),
    ("phone case", ProductClass::SmallAccessory),
    ("case", ProductClass::SmallAccessory),
    ("charger", ProductClass::SmallAccessory),
    ("cable", ProductClass::SmallAccessory),
    ("earbuds", ProductClass::SmallAccessory),
    ("keychain", ProductClass::SmallAccessory),
    ("wallet", ProductClass::SmallAccessory),
    ("card holder", ProductClass::SmallAccessory),
    ("screen protector", ProductClass::SmallAccessory),
    ("adapter", ProductClass::SmallAccessory),
    ("shirt", ProductClass::Clothing),
    ("t-shirt", ProductClass::Clothing),
    ("dress", ProductClass::Clothing),
    ("jeans", ProductClass::Clothing),
    ("jacket", ProductClass::Clothing),
    ("hoodie", ProductClass::Clothing),
    ("sweater", ProductClass::Clothing),
    ("sock", ProductClass::Clothing),
    ("trousers", ProductClass::Clothing),
    ("sofa", ProductClass::Furniture),
    ("couch", ProductClass::Furniture),
    ("wardrobe", ProductClass::Furniture),
    ("bookshelf", ProductClass::Furniture),
    ("bookcase", ProductClass::Furniture),
    ("dining table", ProductClass::Furniture),
    ("desk", ProductClass::Furniture),
    ("bed frame", ProductClass::Furniture),
    ("cabinet", ProductClass::Furniture),
    ("dresser", ProductClass::Furniture),
];

pub(crate) fn builtin_table() -> eco_types::Result<KeywordTable<ProductClass>> {
    KeywordTable::from_entries(PRODUCT_KEYWORDS.iter().copied())
}
