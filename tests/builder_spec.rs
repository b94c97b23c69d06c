use page_composer::*;
use speculate2::speculate;

fn site_builder() -> PageBuilder {
    let mut builder = PageBuilder::new();
    builder
        .site_name("classic")
        .site_type("portal")
        .expect("valid site type");
    builder
}

speculate! {
    before {
        let calculator = Application::gadget("Calculator");
        let hello = Application::portlet("web/HelloWorldPortlet");
    }

    describe "build" {
        describe "mandatory fields" {
            it "fails without a name" {
                let builder = site_builder();
                let err = builder.build().unwrap_err();
                assert!(matches!(err, CompositionError::MissingField("name")));
            }

            it "fails without a site name" {
                let mut builder = PageBuilder::new();
                builder.name("home").site_type("portal").expect("valid site type");
                let err = builder.build().unwrap_err();
                assert!(matches!(err, CompositionError::MissingField("site_name")));
            }

            it "fails without a site type" {
                let mut builder = PageBuilder::new();
                builder.name("home").site_name("classic");
                let err = builder.build().unwrap_err();
                assert!(matches!(err, CompositionError::MissingField("site_type")));
            }

            it "reports missing fields as validation errors" {
                let err = PageBuilder::new().build().unwrap_err();
                assert!(err.is_validation());
            }

            it "builds once every mandatory field is set" {
                let page = site_builder().name("home").build().expect("Failed to build");

                assert_eq!(page.name(), "home");
                assert_eq!(page.site(), &SiteId::new(SiteType::Portal, "classic"));
                assert!(page.children().is_empty());
            }
        }

        describe "defaults" {
            it "fills unset optional fields with defaults" {
                let page = site_builder().name("home").build().expect("Failed to build");

                assert!(page.display_name.is_none());
                assert!(page.description.is_none());
                assert!(!page.show_max_window);
                assert_eq!(page.access_permission, DEFAULT_ACCESS_PERMISSION);
                assert_eq!(page.edit_permission, default_edit_permission());
                assert_eq!(page.move_apps_permission, DEFAULT_MOVE_APPS_PERMISSION);
                assert_eq!(page.move_containers_permission, DEFAULT_MOVE_CONTAINERS_PERMISSION);
                assert_eq!(page.edit_permission.to_string(), "manager:/platform/administrators");
            }

            it "uses explicitly set values" {
                let page = site_builder()
                    .name("home")
                    .display_name("Home")
                    .description("Landing page")
                    .show_max_window(true)
                    .access_permission(Permission::any("/platform/users").unwrap())
                    .edit_permission(Permission::any("/platform/web-contributors").unwrap())
                    .move_apps_permission(Permission::any("/platform/users").unwrap())
                    .move_containers_permission(Permission::any("/platform/administrators").unwrap())
                    .build()
                    .expect("Failed to build");

                assert_eq!(page.display_name.as_deref(), Some("Home"));
                assert_eq!(page.description.as_deref(), Some("Landing page"));
                assert!(page.show_max_window);
                assert_eq!(page.access_permission, Permission::any("/platform/users").unwrap());
                assert_eq!(page.edit_permission, Permission::any("/platform/web-contributors").unwrap());
                assert_eq!(page.move_apps_permission, Permission::any("/platform/users").unwrap());
                assert_eq!(page.move_containers_permission, Permission::any("/platform/administrators").unwrap());
            }
        }

        describe "reuse" {
            it "produces pages that differ only in the changed field" {
                let mut builder = site_builder();
                builder.child(calculator.clone()).child(hello.clone()).name("page1");
                let p1 = builder.build().expect("Failed to build p1");

                builder.name("page2");
                let p2 = builder.build().expect("Failed to build p2");

                assert_eq!(p1.name(), "page1");
                assert_eq!(p2.name(), "page2");
                assert_eq!(p1.children(), p2.children());

                let mut renamed = p2.clone();
                renamed.id.page_name = "page1".to_string();
                assert_eq!(renamed, p1);
            }

            it "returns independent pages" {
                let mut builder = site_builder();
                builder.name("home").child(calculator.clone());

                let mut first = builder.build().expect("Failed to build");
                first.children_mut().clear();
                first.display_name = Some("Changed".to_string());

                let second = builder.build().expect("Failed to build");
                assert_eq!(second.children().len(), 1);
                assert!(second.display_name.is_none());
            }

            it "does not change built pages when the builder changes later" {
                let mut builder = site_builder();
                builder.name("home");
                let page = builder.build().expect("Failed to build");

                builder.child(hello.clone()).display_name("Later");

                assert!(page.children().is_empty());
                assert!(page.display_name.is_none());
            }
        }
    }

    describe "site_type" {
        it "accepts portal, site and user" {
            for (value, expected) in [
                ("portal", SiteType::Portal),
                ("site", SiteType::Site),
                ("user", SiteType::User),
            ] {
                let page = PageBuilder::new()
                    .name("home")
                    .site_name("owner")
                    .site_type(value)
                    .expect("valid site type")
                    .build()
                    .expect("Failed to build");
                assert_eq!(page.site().site_type, expected);
            }
        }

        it "rejects any other value" {
            for value in ["group", "PORTAL", "", "dashboard", " portal", "user\n", "\tsite "] {
                let err = PageBuilder::new().site_type(value).err().expect("should fail");
                assert!(matches!(err, CompositionError::InvalidSiteType(ref v) if v == value));
            }
        }

        it "keeps the previous site type after a rejected value" {
            let mut builder = site_builder();
            builder.name("home");
            assert!(builder.site_type("nonsense").is_err());

            let page = builder.build().expect("Failed to build");
            assert_eq!(page.site().site_type, SiteType::Portal);
        }
    }

    describe "serialization" {
        it "round-trips a nested page through JSON" {
            let mut builder = site_builder();
            builder
                .name("nested")
                .display_name("Nested")
                .description("Rows within columns")
                .show_max_window(true)
                .access_permission(Permission::of(vec![
                    Membership::new("manager", "/platform/administrators").unwrap(),
                    Membership::any("/organization/a:b").unwrap(),
                ]))
                .move_apps_permission(Permission::of(vec![]))
                .new_rows_builder()
                .child(hello.clone().with_title("Hello"))
                .new_columns_builder()
                .child(calculator.clone().with_access_permission(Permission::any("/platform/users").unwrap()))
                .new_custom_container_builder(Container::new("system:/groovy/custom.gtmpl"))
                .child(hello.clone())
                .build_to_top_builder();
            let page = builder.build().expect("Failed to build");

            let json = serde_json::to_string(&page).expect("Failed to serialize");
            let back: Page = serde_json::from_str(&json).expect("Failed to deserialize");

            assert_eq!(back, page);
            assert_eq!(back.application_count(), 3);
        }
    }

    describe "layout" {
        it "appends flat children in order" {
            let page = site_builder()
                .name("flat")
                .child(calculator.clone())
                .child(hello.clone())
                .build()
                .expect("Failed to build");

            let items: Vec<_> = page
                .children()
                .iter()
                .filter_map(ContainerItem::as_application)
                .map(|a| a.content_id.as_str())
                .collect();
            assert_eq!(items, vec!["Calculator", "web/HelloWorldPortlet"]);
        }

        it "nests rows and columns" {
            let mut builder = site_builder();
            builder
                .name("nested")
                .new_rows_builder()
                .child(hello.clone())
                .new_columns_builder()
                .child(calculator.clone())
                .new_columns_builder()
                .child(calculator.clone())
                .child(hello.clone())
                .build_to_parent_builder()
                .expect("open container")
                .build_to_parent_builder()
                .expect("open container")
                .build_to_top_builder();

            let page = builder.build().expect("Failed to build");
            assert_eq!(page.children().len(), 1);
            assert_eq!(page.application_count(), 4);

            let rows = page.children()[0].as_container().expect("rows container");
            assert_eq!(rows.template(), ROWS_TEMPLATE);
            assert_eq!(rows.children().len(), 2);

            let columns = rows.children()[1].as_container().expect("columns container");
            assert_eq!(columns.template(), COLUMNS_TEMPLATE);
            assert_eq!(columns.children().len(), 2);

            let inner = columns.children()[1].as_container().expect("inner columns");
            assert_eq!(inner.application_count(), 2);
        }

        it "keeps children of a custom container" {
            let mut custom = Container::new("system:/groovy/custom.gtmpl");
            custom.children_mut().push(hello.clone().into());
            custom.set_move_apps_permission(Permission::any("/platform/administrators").unwrap());

            let mut builder = site_builder();
            builder
                .name("custom")
                .new_custom_container_builder(custom)
                .child(calculator.clone())
                .build_to_top_builder();

            let page = builder.build().expect("Failed to build");
            let container = page.children()[0].as_container().expect("custom container");
            assert_eq!(container.template(), "system:/groovy/custom.gtmpl");
            assert_eq!(container.children().len(), 2);
            assert_eq!(
                container.move_apps_permission(),
                &Permission::any("/platform/administrators").unwrap()
            );
        }

        it "tracks the number of open containers" {
            let mut builder = site_builder();
            assert_eq!(builder.depth(), 0);
            builder.new_rows_builder().new_columns_builder();
            assert_eq!(builder.depth(), 2);
            builder.build_to_parent_builder().expect("open container");
            assert_eq!(builder.depth(), 1);
            builder.build_to_top_builder();
            assert_eq!(builder.depth(), 0);
        }

        it "fails to close a container when none is open" {
            let err = site_builder().build_to_parent_builder().err().expect("should fail");
            assert!(matches!(err, CompositionError::NoOpenContainer));
        }

        it "fails to build while containers are open" {
            let mut builder = site_builder();
            builder.name("open").new_rows_builder().new_columns_builder();

            let err = builder.build().unwrap_err();
            assert!(matches!(err, CompositionError::UnclosedContainers(2)));

            builder.build_to_top_builder();
            assert!(builder.build().is_ok());
        }
    }
}
