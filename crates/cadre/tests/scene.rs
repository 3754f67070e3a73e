use anyhow::Result;
use cadre::{LoadedScene, Mutation, NodeSpec, Rect, Scene, SceneError};

const DASHBOARD: &str = include_str!("../scenes/dashboard.json");

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dashboard() -> Result<(Scene, LoadedScene)> {
    let scene: Scene = serde_json::from_str(DASHBOARD)?;
    let loaded = LoadedScene::build(&scene)?;
    Ok((scene, loaded))
}

#[test]
/// # Errors
/// Returns an error if the scene cannot be loaded or read.
fn dashboard_initial_layout() -> Result<()> {
    init_logs();
    let (_, mut loaded) = dashboard()?;

    assert_eq!(loaded.rect("header")?, Rect::new(0.0, 0.0, 1_200.0, 60.0));
    assert_eq!(loaded.rect("search")?, Rect::new(444.0, 14.0, 400.0, 32.0));
    assert_eq!(loaded.rect("avatar")?, Rect::new(1_168.0, 14.0, 32.0, 32.0));
    assert_eq!(loaded.rect("body")?, Rect::new(0.0, 60.0, 1_200.0, 740.0));
    assert_eq!(loaded.rect("sidebar")?, Rect::new(0.0, 0.0, 240.0, 740.0));
    assert_eq!(loaded.rect("badge")?, Rect::new(16.0, 16.0, 120.0, 24.0));
    assert_eq!(loaded.rect("content")?, Rect::new(240.0, 0.0, 960.0, 740.0));
    assert_eq!(loaded.rect("card-3")?, Rect::new(632.0, 0.0, 300.0, 180.0));
    assert_eq!(loaded.rect("card-5")?, Rect::new(316.0, 196.0, 300.0, 180.0));
    assert_eq!(loaded.tree().passes_total(), 1);
    Ok(())
}

#[test]
/// # Errors
/// Returns an error if a mutation fails.
fn dashboard_mutations_replay() -> Result<()> {
    init_logs();
    let (scene, mut loaded) = dashboard()?;
    let [widen, insert, remove, unchanged, ..] = scene.mutations.as_slice() else {
        anyhow::bail!("dashboard scene lost its mutations");
    };

    assert!(loaded.apply(widen)?);
    assert_eq!(loaded.rect("card-3")?, Rect::new(0.0, 196.0, 300.0, 180.0));
    assert_eq!(loaded.rect("badge")?, Rect::new(16.0, 16.0, 160.0, 24.0));
    assert_eq!(loaded.tree().nodes_recomputed_last(), 8);

    assert!(loaded.apply(insert)?);
    assert_eq!(loaded.rect("card-6")?, Rect::new(0.0, 0.0, 300.0, 180.0));
    assert_eq!(loaded.rect("card-1")?, Rect::new(316.0, 0.0, 300.0, 180.0));

    assert!(loaded.apply(remove)?);
    assert_eq!(
        loaded.rect("card-3"),
        Err(SceneError::UnknownFrame("card-3".to_owned()))
    );

    assert!(!loaded.apply(unchanged)?);
    let listing = loaded.snapshot()?;
    assert_eq!(listing.len(), 14);
    assert_eq!(listing.first().map(|entry| entry.name.as_str()), Some("window"));
    Ok(())
}

#[test]
/// # Errors
/// Returns an error if the scene cannot be loaded.
fn bad_scripts_are_rejected() -> Result<()> {
    init_logs();
    let (_, mut loaded) = dashboard()?;

    let unknown = Mutation::SetGrow {
        target: "footer".to_owned(),
        value: 1.0,
    };
    assert_eq!(
        loaded.apply(&unknown),
        Err(SceneError::UnknownFrame("footer".to_owned()))
    );

    let duplicate = Mutation::Insert {
        parent: "content".to_owned(),
        index: None,
        node: NodeSpec {
            name: "card-1".to_owned(),
            config: cadre::FrameConfig::sized(10.0, 10.0),
            layout: cadre::LayoutKind::Absolute,
            children: Vec::new(),
        },
    };
    assert_eq!(
        loaded.apply(&duplicate),
        Err(SceneError::DuplicateName("card-1".to_owned()))
    );

    let out_of_range = Mutation::Insert {
        parent: "content".to_owned(),
        index: Some(99),
        node: NodeSpec {
            name: "late".to_owned(),
            config: cadre::FrameConfig::sized(10.0, 10.0),
            layout: cadre::LayoutKind::Absolute,
            children: Vec::new(),
        },
    };
    assert!(matches!(
        loaded.apply(&out_of_range),
        Err(SceneError::Frame(cadre::FrameError::IndexOutOfBounds { index: 99, .. }))
    ));
    assert!(matches!(loaded.frame("late"), Err(SceneError::UnknownFrame(_))));

    let root = Mutation::Remove {
        target: "window".to_owned(),
    };
    assert_eq!(
        loaded.apply(&root),
        Err(SceneError::Detached("window".to_owned()))
    );
    Ok(())
}

#[test]
/// # Errors
/// Returns an error if the scene cannot be loaded or the retry fails.
fn nested_duplicate_leaves_no_partial_subtree() -> Result<()> {
    init_logs();
    let (_, mut loaded) = dashboard()?;
    let frames_before = loaded.snapshot()?.len();
    let panel = |inner: &str| Mutation::Insert {
        parent: "content".to_owned(),
        index: None,
        node: NodeSpec {
            name: "panel".to_owned(),
            config: cadre::FrameConfig::sized(100.0, 100.0),
            layout: cadre::LayoutKind::flex(),
            children: vec![NodeSpec {
                name: inner.to_owned(),
                config: cadre::FrameConfig::sized(10.0, 10.0),
                layout: cadre::LayoutKind::Absolute,
                children: Vec::new(),
            }],
        },
    };

    assert_eq!(
        loaded.apply(&panel("card-2")),
        Err(SceneError::DuplicateName("card-2".to_owned()))
    );
    assert!(matches!(loaded.frame("panel"), Err(SceneError::UnknownFrame(_))));
    assert_eq!(loaded.snapshot()?.len(), frames_before);
    assert_eq!(loaded.tree().parent(loaded.frame("card-2")?)?, Some(loaded.frame("content")?));

    assert!(loaded.apply(&panel("panel-label"))?);
    assert_eq!(loaded.rect("panel-label")?, Rect::new(0.0, 0.0, 10.0, 10.0));
    Ok(())
}

#[test]
fn invalid_layout_ratio_fails_the_build() {
    init_logs();
    let source = r#"{
        "root": {
            "name": "window",
            "config": { "width": { "px": 100 }, "height": { "px": 100 } },
            "layout": { "kind": "flex", "justify": { "place": 2.0 } },
            "children": [{ "name": "a", "config": { "width": { "px": 10 }, "height": { "px": 10 } } }]
        }
    }"#;
    let built = serde_json::from_str::<Scene>(source)
        .map_err(anyhow::Error::from)
        .and_then(|scene| LoadedScene::build(&scene).map_err(anyhow::Error::from));
    assert!(built.err().is_some_and(|error| {
        matches!(
            error.downcast_ref::<SceneError>(),
            Some(SceneError::Frame(cadre::FrameError::Track(_)))
        )
    }));
}

#[test]
/// # Errors
/// Returns an error if the scene cannot be loaded.
fn invalid_inserted_config_is_rejected() -> Result<()> {
    init_logs();
    let (_, mut loaded) = dashboard()?;
    let mut config = cadre::FrameConfig::sized(10.0, 10.0);
    config.align_self.set(cadre::track::AutoOr::Value(5.0));
    let insert = Mutation::Insert {
        parent: "content".to_owned(),
        index: None,
        node: NodeSpec {
            name: "bad".to_owned(),
            config,
            layout: cadre::LayoutKind::Absolute,
            children: Vec::new(),
        },
    };

    assert!(matches!(
        loaded.apply(&insert),
        Err(SceneError::Frame(cadre::FrameError::Track(_)))
    ));
    assert!(matches!(loaded.frame("bad"), Err(SceneError::UnknownFrame(_))));
    Ok(())
}
