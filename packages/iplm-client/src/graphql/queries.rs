//! GraphQL query definitions

pub const ORGANIZATIONS_QUERY: &str = r#"
  query organizations {
    organizations {
      id
      name
      description
      parent {
        id
        name
      }
      orgTypes {
        id
        name
      }
      addresses {
        street
        street2
        city
        state
        zip
        country
      }
    }
  }
"#;

pub const ORGANIZATION_TYPES_QUERY: &str = r#"
  query organizationTypes {
    organizationTypes {
      id
      name
      description
    }
  }
"#;
