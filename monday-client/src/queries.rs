//! GraphQL documents used by the client.

pub const USERS: &str = r#"
query {
    users {
        id name email
    }
}
"#;

pub const BOARDS: &str = r#"
query {
    boards {
        id name
    }
}
"#;

pub const GROUPS: &str = r#"
query ($boardId: [Int]) {
    boards (ids: $boardId) {
        groups {
            id title
        }
    }
}
"#;

pub const COLUMNS: &str = r#"
query ($boardId: [Int]) {
    boards (ids: $boardId) {
        columns { id title type settings_str }
    }
}
"#;

pub const ITEMS: &str = r#"
query ($boardId: [Int]) {
    boards (ids: $boardId) {
        items {
            id
            group { id }
            name
            column_values {
                id value
            }
        }
    }
}
"#;

pub const CREATE_ITEM: &str = r#"
mutation ($boardId: Int!, $groupId: String!, $itemName: String!, $colValues: JSON!) {
    create_item (board_id: $boardId, group_id: $groupId, item_name: $itemName, column_values: $colValues) {
        id
    }
}
"#;

pub const CREATE_UPDATE: &str = r#"
mutation ($itemId: Int!, $body: String!) {
    create_update (item_id: $itemId, body: $body) {
        id
    }
}
"#;
