use crate::core::choices::ChoiceCatalog;
use crate::core::field::FieldSpec;
use crate::core::field_errors::FieldErrors;
use crate::core::form_data::FormData;
use crate::utils::error::{FormError, Result};

/// 可重複的子表單，例如每種語言一列
pub trait Subform: Default + Send + Sync {
    fn bind(data: &FormData, prefix: &str) -> Self;

    fn validate(&self, catalog: &ChoiceCatalog, prefix: &str, errors: &mut FieldErrors);

    fn fields(catalog: &ChoiceCatalog) -> Vec<FieldSpec>;
}

#[derive(Debug, Clone)]
pub struct FieldList<T> {
    name: &'static str,
    min_entries: usize,
    max_entries: usize,
    entries: Vec<T>,
}

impl<T: Subform> FieldList<T> {
    /// 依送出的索引綁定，超過上限的索引捨棄，不足下限補空白列
    pub fn bind(
        name: &'static str,
        data: &FormData,
        min_entries: usize,
        max_entries: usize,
    ) -> Self {
        let mut entries: Vec<T> = data
            .indices(name)
            .into_iter()
            .take(max_entries)
            .map(|index| T::bind(data, &format!("{}-{}-", name, index)))
            .collect();

        while entries.len() < min_entries {
            entries.push(T::default());
        }

        tracing::debug!("Bound {} entries for '{}'", entries.len(), name);

        Self {
            name,
            min_entries,
            max_entries,
            entries,
        }
    }

    pub fn append_entry(&mut self) -> Result<&mut T> {
        if self.entries.len() >= self.max_entries {
            return Err(FormError::TooManyEntries {
                field: self.name.to_string(),
                max: self.max_entries,
            });
        }
        self.entries.push(T::default());
        let last = self.entries.len() - 1;
        Ok(&mut self.entries[last])
    }

    pub fn validate(&self, catalog: &ChoiceCatalog, errors: &mut FieldErrors) {
        for (position, entry) in self.entries.iter().enumerate() {
            entry.validate(catalog, &format!("{}-{}-", self.name, position), errors);
        }
    }

    pub fn spec_for(
        name: &str,
        label: &str,
        min_entries: usize,
        max_entries: usize,
        catalog: &ChoiceCatalog,
    ) -> FieldSpec {
        FieldSpec::list(name, label, min_entries, max_entries, T::fields(catalog))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_entries(&self) -> usize {
        self.min_entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validators;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Tag {
        name: Option<String>,
    }

    impl Subform for Tag {
        fn bind(data: &FormData, prefix: &str) -> Self {
            Self {
                name: data.get(&format!("{}name", prefix)).map(str::to_string),
            }
        }

        fn validate(&self, _catalog: &ChoiceCatalog, prefix: &str, errors: &mut FieldErrors) {
            errors.check(
                &format!("{}name", prefix),
                validators::data_required(self.name.as_deref()),
            );
        }

        fn fields(_catalog: &ChoiceCatalog) -> Vec<FieldSpec> {
            vec![FieldSpec::text("name", "Name").required()]
        }
    }

    #[test]
    fn test_bind_pads_to_min_entries() {
        let list: FieldList<Tag> = FieldList::bind("tags", &FormData::new(), 1, 10);
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0], Tag::default());
    }

    #[test]
    fn test_bind_truncates_to_max_entries() {
        let data = FormData::from_pairs((0..5).map(|i| (format!("tags-{}-name", i), format!("t{}", i))));
        let list: FieldList<Tag> = FieldList::bind("tags", &data, 0, 3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.entries()[2].name.as_deref(), Some("t2"));
    }

    #[test]
    fn test_append_entry_respects_max() {
        let mut list: FieldList<Tag> = FieldList::bind("tags", &FormData::new(), 0, 1);
        assert!(list.append_entry().is_ok());
        let err = list.append_entry().unwrap_err();
        assert!(matches!(err, FormError::TooManyEntries { max: 1, .. }));
    }

    #[test]
    fn test_validation_uses_positions_not_submitted_indices() {
        let data = FormData::from_pairs([("tags-4-name", ""), ("tags-7-name", "ok")]);
        let list: FieldList<Tag> = FieldList::bind("tags", &data, 0, 10);
        let mut errors = FieldErrors::new();
        list.validate(&ChoiceCatalog::default(), &mut errors);
        assert!(errors.contains("tags-0-name"));
        assert!(!errors.contains("tags-1-name"));
    }
}
