//! GraphQL mutation definitions

// ============================================================================
// AUTHENTICATION MUTATIONS
// ============================================================================

pub const TOKEN_AUTH: &str = r#"
  mutation TokenAuth($username: String!, $password: String!) {
    tokenAuth(username: $username, password: $password) {
      token
      payload
      refreshExpiresIn
    }
  }
"#;

// ============================================================================
// ORGANIZATION MUTATIONS
// ============================================================================

pub const UPDATE_ORGANIZATION: &str = r#"
  mutation updateOrganization($organization: OrganizationInput!) {
    updateOrganization(organization: $organization) {
      organization {
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
          id
          street
          street2
          city
          state
          country
          zip
        }
      }
    }
  }
"#;

pub const UPDATE_ORGANIZATION_TYPE: &str = r#"
  mutation updateOrganizationType($organizationType: OrganizationTypeInput!) {
    updateOrganizationType(organizationType: $organizationType) {
      organizationType {
        id
        name
        description
      }
    }
  }
"#;
