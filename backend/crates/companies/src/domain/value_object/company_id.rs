use kernel::id::Id;

pub struct CompanyMarker;
pub type CompanyId = Id<CompanyMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_id_new() {
        let company_id = CompanyId::new();
        let uuid = company_id.as_uuid();
        assert_eq!(uuid.get_version_num(), 4); // UUIDv4
    }

    #[test]
    fn test_from_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let company_id = CompanyId::from_uuid(uuid);
        assert_eq!(company_id.as_uuid(), &uuid);
    }

    #[test]
    fn test_nil_sentinel() {
        assert!(CompanyId::nil().is_nil());
        assert_eq!(CompanyId::nil(), CompanyId::from_uuid(uuid::Uuid::nil()));
    }
}
