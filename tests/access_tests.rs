use terracode::access::{AccessPolicy, Decision, Destination, decide, landing_for, role_home};
use terracode::models::Role;
use terracode::session::{Principal, Session};
use uuid::Uuid;

// --- Fixtures ---

const ALL_ROLES: [Role; 3] = [Role::Developer, Role::Company, Role::Admin];

fn principal(role: Role) -> Principal {
    Principal {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        role,
        email: "test@example.com".to_string(),
    }
}

fn session_with_role(role: Role) -> Session {
    Session::authenticated(principal(role), "token".to_string())
}

fn every_session_state() -> Vec<Session> {
    let mut sessions = vec![Session::anonymous()];
    sessions.extend(ALL_ROLES.map(session_with_role));
    sessions
}

// --- Guard Properties ---

#[test]
fn public_destinations_allow_any_session_state() {
    // For all destinations with `public` policy and any session state,
    // decide returns Allow.
    for destination in Destination::ALL {
        if destination.policy() != AccessPolicy::Public {
            continue;
        }
        for session in every_session_state() {
            assert_eq!(
                decide(destination, &session),
                Decision::Allow,
                "public destination {:?} must allow {:?}",
                destination,
                session.principal().map(|p| p.role),
            );
        }
    }
}

#[test]
fn anonymous_sessions_redirect_to_login_on_any_non_public_destination() {
    let anonymous = Session::anonymous();
    for destination in Destination::ALL {
        if destination.policy() == AccessPolicy::Public {
            continue;
        }
        assert_eq!(
            decide(destination, &anonymous),
            Decision::RedirectTo(Destination::Login),
            "anonymous access to {:?} must bounce to login",
            destination,
        );
    }
}

#[test]
fn any_authenticated_destinations_allow_every_role() {
    for destination in Destination::ALL {
        if destination.policy() != AccessPolicy::AnyAuthenticated {
            continue;
        }
        for role in ALL_ROLES {
            assert_eq!(decide(destination, &session_with_role(role)), Decision::Allow);
        }
    }
}

#[test]
fn role_restricted_destinations_allow_iff_role_is_member() {
    // Allow when the session's role is in the allowed set; otherwise redirect
    // to that role's own home, never anywhere else.
    for destination in Destination::ALL {
        let AccessPolicy::RoleRestricted(allowed) = destination.policy() else {
            continue;
        };
        for role in ALL_ROLES {
            let session = session_with_role(role);
            let expected = if allowed.contains(&role) {
                Decision::Allow
            } else {
                Decision::RedirectTo(role_home(role))
            };
            assert_eq!(
                decide(destination, &session),
                expected,
                "{:?} visiting {:?}",
                role,
                destination,
            );
        }
    }
}

#[test]
fn role_home_is_always_accessible_to_its_own_role() {
    // No redirect loops: for all roles r,
    // decide(role_home(r), session-with-role(r)) == Allow.
    for role in ALL_ROLES {
        assert_eq!(
            decide(role_home(role), &session_with_role(role)),
            Decision::Allow,
            "role {:?} must be allowed on its own home",
            role,
        );
    }
}

#[test]
fn every_redirect_target_resolves_to_allow_for_the_same_session() {
    // The stronger loop-freedom property: whatever the guard redirects to is
    // itself allowed for that session, so following one redirect always
    // terminates.
    for destination in Destination::ALL {
        for session in every_session_state() {
            if let Decision::RedirectTo(target) = decide(destination, &session) {
                assert_eq!(
                    decide(target, &session),
                    Decision::Allow,
                    "redirect target {:?} for {:?} at {:?} must be allowed",
                    target,
                    session.principal().map(|p| p.role),
                    destination,
                );
            }
        }
    }
}

// --- Role Router ---

#[test]
fn role_home_maps_each_role_to_its_dashboard() {
    assert_eq!(role_home(Role::Developer), Destination::DeveloperDashboard);
    assert_eq!(role_home(Role::Company), Destination::CompanyDashboard);
    assert_eq!(role_home(Role::Admin), Destination::AdminDashboard);
}

#[test]
fn landing_falls_back_to_public_home_for_anonymous_sessions() {
    assert_eq!(landing_for(&Session::anonymous()), Destination::Home);
    for role in ALL_ROLES {
        assert_eq!(landing_for(&session_with_role(role)), role_home(role));
    }
}

#[test]
fn destination_paths_match_the_route_table() {
    assert_eq!(Destination::Home.path(), "/");
    assert_eq!(Destination::Login.path(), "/login");
    assert_eq!(Destination::DeveloperDashboard.path(), "/dashboard/developer");
    assert_eq!(Destination::CompanyDashboard.path(), "/dashboard/company");
    assert_eq!(Destination::AdminDashboard.path(), "/dashboard/admin");
    assert_eq!(Destination::PostJob.path(), "/post-job");
}
