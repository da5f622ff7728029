use catnote_core::{
    find_morphism_by_name, find_object_by_name, morphism_ids, object_ids, Cell, DocumentKind,
    FormalContent, ModelBuilder, NewMorphism, NewObject, DOCUMENT_VERSION,
};

fn formal_at(doc: &catnote_core::Document, index: usize) -> &FormalContent {
    let cell_id = doc.notebook.cell_order[index];
    doc.notebook
        .get(cell_id)
        .and_then(Cell::as_formal)
        .expect("cell should be formal")
}

#[test]
fn empty_builder_builds_model_document() {
    let builder = ModelBuilder::new("Test Model", "simple-schema");
    let doc = builder.build();

    assert_eq!(doc.name, "Test Model");
    assert_eq!(doc.kind, DocumentKind::Model);
    assert_eq!(doc.version, DOCUMENT_VERSION);
    assert_eq!(doc.theory.as_deref(), Some("simple-schema"));
    assert!(doc.model.is_none());
    assert!(doc.notebook.is_empty());
    assert!(doc.notebook.cell_contents.is_empty());
}

#[test]
fn add_object_appends_one_formal_cell_with_returned_entity_id() {
    let mut builder = ModelBuilder::new("Test Model", "simple-schema");
    let entity_id = builder.add_object(NewObject::new("Entity1", "Entity"));
    let doc = builder.build();

    assert_eq!(doc.notebook.len(), 1);
    match formal_at(&doc, 0) {
        FormalContent::Object(decl) => {
            assert_eq!(decl.id, entity_id);
            assert_eq!(decl.name, "Entity1");
            assert_eq!(decl.ob_type.as_basic(), Some("Entity"));
            assert!(decl.over.is_none());
        }
        other => panic!("expected object, got {other:?}"),
    }
    assert_ne!(doc.notebook.cell_order[0].as_uuid(), entity_id.as_uuid());
}

#[test]
fn description_adds_rich_text_cell_immediately_before_object() {
    let mut builder = ModelBuilder::new("Test Model", "simple-schema");
    builder.add_object(NewObject::new("E0", "Entity"));
    let entity_id =
        builder.add_object(NewObject::new("Entity1", "Entity").with_description("A test entity"));
    let doc = builder.build();

    assert_eq!(doc.notebook.len(), 3);
    let description = doc
        .notebook
        .get(doc.notebook.cell_order[1])
        .and_then(Cell::as_rich_text);
    assert_eq!(description, Some("A test entity"));
    assert_eq!(formal_at(&doc, 2).entity_id(), entity_id);
}

#[test]
fn description_on_morphism_precedes_morphism_cell() {
    let mut builder = ModelBuilder::new("Test Model", "simple-schema");
    let a = builder.add_object(NewObject::new("A", "Entity"));
    let b = builder.add_object(NewObject::new("B", "Entity"));
    let rel = builder
        .add_morphism(NewMorphism::new("rel", a, b, "Hom").with_description("A relates to B"));
    let doc = builder.build();

    assert_eq!(doc.notebook.len(), 4);
    let description = doc
        .notebook
        .get(doc.notebook.cell_order[2])
        .and_then(Cell::as_rich_text);
    assert_eq!(description, Some("A relates to B"));
    assert_eq!(formal_at(&doc, 3).entity_id(), rel);
}

#[test]
fn empty_description_adds_no_cell() {
    let mut builder = ModelBuilder::new("Test Model", "simple-schema");
    builder.add_object(NewObject::new("E1", "Entity").with_description(""));
    assert_eq!(builder.cell_count(), 1);
}

#[test]
fn whitespace_description_is_kept_as_its_own_cell() {
    let mut builder = ModelBuilder::new("Test Model", "simple-schema");
    let a = builder.add_object(NewObject::new("A", "Entity").with_description("   "));
    let b = builder.add_object(NewObject::new("B", "Entity"));
    let rel = builder.add_morphism(NewMorphism::new("rel", a, b, "Hom").with_description("\n"));
    let doc = builder.build();

    assert_eq!(doc.notebook.len(), 5);
    let text_at = |index: usize| {
        doc.notebook
            .get(doc.notebook.cell_order[index])
            .and_then(Cell::as_rich_text)
    };
    assert_eq!(text_at(0), Some("   "));
    assert_eq!(formal_at(&doc, 1).entity_id(), a);
    assert_eq!(formal_at(&doc, 2).entity_id(), b);
    assert_eq!(text_at(3), Some("\n"));
    assert_eq!(formal_at(&doc, 4).entity_id(), rel);
}

#[test]
fn text_after_two_objects_is_third_and_last() {
    let mut builder = ModelBuilder::new("Test Model", "simple-schema");
    builder.add_object(NewObject::new("E1", "Entity"));
    builder.add_object(NewObject::new("E2", "Entity"));
    let text_id = builder.add_text("x");
    let doc = builder.build();

    assert_eq!(doc.notebook.cell_order.len(), 3);
    assert_eq!(doc.notebook.cell_order.last(), Some(&text_id));
    assert_eq!(
        doc.notebook.get(text_id).and_then(Cell::as_rich_text),
        Some("x")
    );
}

#[test]
fn two_objects_and_morphism_are_ordered_and_wired_by_entity_id() {
    let mut builder = ModelBuilder::new("Test Model", "simple-schema");
    let a = builder.add_object(NewObject::new("A", "Entity"));
    let b = builder.add_object(NewObject::new("B", "Entity"));
    let rel = builder.add_morphism(NewMorphism::new("rel", a, b, "Hom"));
    let doc = builder.build();

    assert_eq!(doc.notebook.len(), 3);
    assert_eq!(formal_at(&doc, 0).name(), "A");
    assert_eq!(formal_at(&doc, 1).name(), "B");
    assert_eq!(formal_at(&doc, 2).name(), "rel");

    assert_eq!(object_ids(&doc), vec![a, b]);
    assert_eq!(morphism_ids(&doc), vec![rel]);
    match formal_at(&doc, 2) {
        FormalContent::Morphism(decl) => {
            assert_eq!(decl.dom_id(), a);
            assert_eq!(decl.cod_id(), b);
            assert_eq!(decl.mor_type.as_basic(), Some("Hom"));
        }
        other => panic!("expected morphism, got {other:?}"),
    }
    assert_eq!(find_object_by_name(&doc, "A"), Some(a));
    assert_eq!(find_morphism_by_name(&doc, "rel"), Some(rel));
}

#[test]
fn build_is_repeatable_without_new_identifiers() {
    let mut builder = ModelBuilder::new("Test Model", "simple-schema");
    let a = builder.add_object(NewObject::new("A", "Entity").with_description("first"));
    builder.add_morphism(NewMorphism::new("loop", a, a, "Hom"));
    builder.add_text("notes");

    let first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);
    assert_eq!(builder.cell_count(), 4);
}

#[test]
fn dangling_references_are_stored_verbatim() {
    let mut builder = ModelBuilder::new("Test Model", "simple-schema");
    let ghost = catnote_core::EntityId::generate();
    let a = builder.add_object(NewObject::new("A", "Entity"));
    builder.add_morphism(NewMorphism::new("to_ghost", a, ghost, "Hom"));
    let doc = builder.build();

    match formal_at(&doc, 1) {
        FormalContent::Morphism(decl) => assert_eq!(decl.cod_id(), ghost),
        other => panic!("expected morphism, got {other:?}"),
    }
}
