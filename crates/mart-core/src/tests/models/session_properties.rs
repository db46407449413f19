use crate::{Role, Session, SessionPatch};

use proptest::prelude::*;

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Shopper), Just(Role::Admin)]
}

fn arb_patch() -> impl Strategy<Value = SessionPatch> {
    (
        proptest::option::of("[a-z0-9]{1,12}"),
        proptest::option::of(arb_role()),
        proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
        proptest::option::of(1i64..10_000),
        proptest::option::of("[a-z]{1,10}"),
    )
        .prop_map(|(token, role, email, user_id, display_name)| SessionPatch {
            token,
            role,
            email,
            user_id,
            display_name,
        })
}

fn arb_session() -> impl Strategy<Value = Session> {
    arb_patch().prop_map(|patch| {
        let mut session = Session::default();
        session.merge(patch);
        session
    })
}

proptest! {
    #[test]
    fn merge_is_idempotent(session in arb_session(), patch in arb_patch()) {
        let mut once = session.clone();
        once.merge(patch.clone());

        let mut twice = once.clone();
        twice.merge(patch);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_only_touches_present_fields(session in arb_session(), patch in arb_patch()) {
        let mut merged = session.clone();
        merged.merge(patch.clone());

        prop_assert_eq!(merged.token, patch.token.or(session.token));
        prop_assert_eq!(merged.role, patch.role.or(session.role));
        prop_assert_eq!(merged.email, patch.email.or(session.email));
        prop_assert_eq!(merged.user_id, patch.user_id.or(session.user_id));
        prop_assert_eq!(merged.display_name, patch.display_name.or(session.display_name));
    }

    #[test]
    fn merges_of_disjoint_fields_commute(session in arb_session(), user_id in 1i64..10_000, name in "[a-z]{1,10}") {
        let id_patch = SessionPatch::new().user_id(user_id);
        let name_patch = SessionPatch::new().display_name(name);

        let mut a = session.clone();
        a.merge(id_patch.clone());
        a.merge(name_patch.clone());

        let mut b = session;
        b.merge(name_patch);
        b.merge(id_patch);

        prop_assert_eq!(a, b);
    }
}
