use serde::{Deserialize, Serialize};

/// A game record as stored by the catalog service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "plataforma")]
    pub platform: String,
    /// Free-form rating, usually numeric
    #[serde(rename = "classificacao")]
    pub rating: String,
    #[serde(rename = "imgUrl")]
    pub image_url: String,
}

impl CatalogItem {
    /// Case-insensitive substring match against the item name.
    /// `needle` must already be lowercase.
    pub fn name_matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// Request body for create and update: every field except `id`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "plataforma")]
    pub platform: String,
    #[serde(rename = "classificacao")]
    pub rating: String,
    #[serde(rename = "imgUrl")]
    pub image_url: String,
}

/// Editable field of the add/edit form
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FormField {
    #[default]
    Name,
    Category,
    Platform,
    Rating,
    ImageUrl,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Category,
        FormField::Platform,
        FormField::Rating,
        FormField::ImageUrl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Category => "Category",
            FormField::Platform => "Platform",
            FormField::Rating => "Rating",
            FormField::ImageUrl => "Image URL",
        }
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Category,
            FormField::Category => FormField::Platform,
            FormField::Platform => FormField::Rating,
            FormField::Rating => FormField::ImageUrl,
            FormField::ImageUrl => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::ImageUrl,
            FormField::Category => FormField::Name,
            FormField::Platform => FormField::Category,
            FormField::Rating => FormField::Platform,
            FormField::ImageUrl => FormField::Rating,
        }
    }
}

/// Values typed into the add/edit modal
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub platform: String,
    pub rating: String,
    pub image_url: String,
    pub focused: FormField,
}

impl ItemForm {
    pub fn from_item(item: &CatalogItem) -> Self {
        ItemForm {
            name: item.name.clone(),
            category: item.category.clone(),
            platform: item.platform.clone(),
            rating: item.rating.clone(),
            image_url: item.image_url.clone(),
            focused: FormField::Name,
        }
    }

    pub fn clear(&mut self) {
        *self = ItemForm::default();
    }

    /// True when none of the five fields is empty
    pub fn is_complete(&self) -> bool {
        FormField::ALL.iter().all(|f| !self.value(*f).is_empty())
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Platform => &self.platform,
            FormField::Rating => &self.rating,
            FormField::ImageUrl => &self.image_url,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Platform => &mut self.platform,
            FormField::Rating => &mut self.rating,
            FormField::ImageUrl => &mut self.image_url,
        }
    }

    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            platform: self.platform.clone(),
            rating: self.rating.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Blocking message box shown over the catalog
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Alert {
            title: title.into(),
            message: message.into(),
        }
    }
}
