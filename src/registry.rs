use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

use crate::environment::Environment;
use crate::error::{UveError, Warning};
use crate::paths::{self, env_path};
use crate::provisioner::Provisioner;

/// Result of [`Registry::create`].
#[derive(Debug)]
pub struct Created {
    pub environment: Environment,
    pub warnings: Vec<Warning>,
}

/// Result of [`Registry::clone_env`].
#[derive(Debug)]
pub struct Cloned {
    pub environment: Environment,
    /// Files copied into the new environment's package directory.
    pub copied_files: usize,
    pub warnings: Vec<Warning>,
}

/// Registry - the set of environments under the environment home
///
/// The registry is stateless: every question is answered from the
/// filesystem and the `VIRTUAL_ENV` value captured at startup.
#[derive(Debug, Clone)]
pub struct Registry {
    home: PathBuf,
    active_env: Option<String>,
}

impl Registry {
    pub fn new(home: impl Into<PathBuf>, active_env: Option<String>) -> Self {
        Self {
            home: home.into(),
            active_env,
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    fn environment(&self, name: &str) -> Environment {
        Environment::new(name, env_path(&self.home, name), self.active_env.as_deref())
    }

    /// Create a new environment.
    ///
    /// `bootstrap` lists packages to install afterwards; `None` skips the
    /// step. A failed bootstrap is reported as a warning.
    pub fn create(
        &self,
        provisioner: &dyn Provisioner,
        name: &str,
        python: Option<&str>,
        bootstrap: Option<&[String]>,
    ) -> Result<Created, UveError> {
        paths::validate_name(name)?;
        paths::ensure_home(&self.home)?;

        let environment = self.environment(name);
        self.ensure_absent(&environment)?;

        tracing::info!(env_name = name, path = %environment.path.display(), ?python, "creating environment");
        provisioner
            .create(&environment.path, python)
            .map_err(|source| UveError::Provisioning {
                name: name.to_string(),
                source,
            })?;

        let mut warnings = Vec::new();
        if let Some(packages) = bootstrap.filter(|p| !p.is_empty()) {
            if let Err(source) = provisioner.install(&environment.path, packages) {
                let warning = Warning::Bootstrap {
                    env: environment.path.clone(),
                    packages: packages.to_vec(),
                    source,
                };
                tracing::debug!(%warning, "advisory");
                warnings.push(warning);
            }
        }

        self.ensure_created(&environment)?;
        Ok(Created {
            environment,
            warnings,
        })
    }

    /// List environments, sorted by name. A missing home is an empty registry.
    pub fn list(&self) -> Result<Vec<Environment>, UveError> {
        if !self.home.exists() {
            tracing::debug!(home = %self.home.display(), "environment home does not exist");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.home).map_err(|e| UveError::io(&self.home, e))?;
        let mut environments = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| UveError::io(&self.home, e))?;
            let file_type = entry.file_type().map_err(|e| UveError::io(entry.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 entry");
                continue;
            };
            environments.push(self.environment(name));
        }

        environments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(environments)
    }

    /// Look up an existing environment that resolves inside the home.
    pub fn get(&self, name: &str) -> Result<Environment, UveError> {
        let environment = self.environment(name);
        if !environment.exists() {
            return Err(UveError::NotFound {
                name: name.to_string(),
                path: environment.path,
            });
        }
        self.ensure_contained(&environment.path)?;
        Ok(environment)
    }

    /// Delete an environment. The active environment is never deleted.
    pub fn delete(&self, name: &str) -> Result<Environment, UveError> {
        let environment = self.get(name)?;

        // `active` compares both literal and canonical paths
        if environment.active {
            return Err(UveError::ActiveEnvironment {
                name: name.to_string(),
                path: environment.path,
            });
        }

        tracing::info!(env_name = name, path = %environment.path.display(), "deleting environment");
        fs::remove_dir_all(&environment.path).map_err(|e| UveError::io(&environment.path, e))?;
        Ok(environment)
    }

    /// Create `dest` pinned to the interpreter of `source` and copy the
    /// installed packages over. Copy problems are warnings.
    pub fn clone_env(
        &self,
        provisioner: &dyn Provisioner,
        source: &str,
        dest: &str,
    ) -> Result<Cloned, UveError> {
        paths::validate_name(dest)?;
        let source_env = self.get(source)?;
        paths::ensure_home(&self.home)?;

        let environment = self.environment(dest);
        self.ensure_absent(&environment)?;

        let interpreter = source_env.interpreter().display().to_string();
        tracing::info!(source, dest, %interpreter, "cloning environment");
        provisioner
            .create(&environment.path, Some(&interpreter))
            .map_err(|source| UveError::Provisioning {
                name: dest.to_string(),
                source,
            })?;
        self.ensure_created(&environment)?;

        let mut warnings = Vec::new();
        let copied_files = copy_packages(&source_env.path, &environment.path, &mut warnings);
        for warning in &warnings {
            tracing::debug!(%warning, "advisory");
        }

        Ok(Cloned {
            environment,
            copied_files,
            warnings,
        })
    }

    fn ensure_absent(&self, environment: &Environment) -> Result<(), UveError> {
        if environment.path.exists() || environment.path.symlink_metadata().is_ok() {
            return Err(UveError::AlreadyExists {
                name: environment.name.clone(),
                path: environment.path.clone(),
            });
        }
        Ok(())
    }

    fn ensure_created(&self, environment: &Environment) -> Result<(), UveError> {
        if environment.exists() {
            return Ok(());
        }
        Err(UveError::io(
            &environment.path,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "provisioner finished but the environment directory is missing",
            ),
        ))
    }

    /// `path` must canonicalize to an immediate child of the canonical home.
    fn ensure_contained(&self, path: &Path) -> Result<(), UveError> {
        let unsafe_path = |reason: String| UveError::UnsafePath {
            path: path.to_path_buf(),
            home: self.home.clone(),
            reason,
        };

        let home = self
            .home
            .canonicalize()
            .map_err(|e| unsafe_path(format!("cannot resolve home: {e}")))?;
        let target = path
            .canonicalize()
            .map_err(|e| unsafe_path(format!("cannot resolve path: {e}")))?;

        if !target.starts_with(&home) || target == home {
            return Err(unsafe_path(format!("resolves to {}", target.display())));
        }
        if target.parent() != Some(home.as_path()) {
            return Err(unsafe_path(format!(
                "{} is nested below an environment",
                target.display()
            )));
        }
        Ok(())
    }
}

fn python_dir_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^python\d+(\.\d+)*t?$").expect("valid regex"))
}

/// Package directories inside an environment, relative to its root.
///
/// POSIX layouts use `lib/python<ver>/site-packages`, Windows uses
/// `Lib/site-packages`.
pub fn package_dirs(env: &Path) -> Vec<PathBuf> {
    if cfg!(windows) {
        let dir = PathBuf::from("Lib").join("site-packages");
        return if env.join(&dir).is_dir() {
            vec![dir]
        } else {
            Vec::new()
        };
    }

    let lib = env.join("lib");
    let Ok(entries) = fs::read_dir(&lib) else {
        return Vec::new();
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| python_dir_pattern().is_match(&entry.file_name().to_string_lossy()))
        .map(|entry| PathBuf::from("lib").join(entry.file_name()).join("site-packages"))
        .filter(|rel| env.join(rel).is_dir())
        .collect();
    dirs.sort();
    dirs
}

/// Copy the package directory of `source` into `dest`.
///
/// Exactly one source package directory is required; none or several
/// produce a warning and nothing is copied. Returns the number of files
/// copied.
fn copy_packages(source: &Path, dest: &Path, warnings: &mut Vec<Warning>) -> usize {
    let source_dirs = package_dirs(source);
    let source_rel = match source_dirs.as_slice() {
        [] => {
            warnings.push(Warning::NoPackageDirectory {
                env: source.to_path_buf(),
            });
            return 0;
        }
        [one] => one.clone(),
        _ => {
            warnings.push(Warning::AmbiguousPackageDirectory {
                env: source.to_path_buf(),
                candidates: source_dirs.iter().map(|rel| source.join(rel)).collect(),
            });
            return 0;
        }
    };

    let dest_dirs = package_dirs(dest);
    let dest_rel = match dest_dirs.as_slice() {
        [one] => one.clone(),
        many if many.contains(&source_rel) => source_rel.clone(),
        [] => source_rel.clone(),
        _ => {
            warnings.push(Warning::AmbiguousPackageDirectory {
                env: dest.to_path_buf(),
                candidates: dest_dirs.iter().map(|rel| dest.join(rel)).collect(),
            });
            return 0;
        }
    };

    copy_tree(&source.join(source_rel), &dest.join(dest_rel), warnings)
}

fn copy_tree(from: &Path, to: &Path, warnings: &mut Vec<Warning>) -> usize {
    let mut copied = 0usize;
    let mut fail = |path: &Path, message: String| {
        warnings.push(Warning::CopyFailed {
            path: path.to_path_buf(),
            message,
        });
    };

    if let Err(err) = fs::create_dir_all(to) {
        fail(to, err.to_string());
        return 0;
    }

    for entry in WalkDir::new(from).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(from).to_path_buf();
                fail(&path, err.to_string());
                continue;
            }
        };

        let Ok(rel) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(rel);
        let file_type = entry.file_type();

        let result = if file_type.is_dir() {
            fs::create_dir_all(&target)
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)
        } else {
            fs::copy(entry.path(), &target).map(|_| {
                copied += 1;
            })
        };

        if let Err(err) = result {
            fail(entry.path(), err.to_string());
        }
    }

    copied
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> std::io::Result<()> {
    let points_to = fs::read_link(link)?;
    if target.symlink_metadata().is_ok() {
        fs::remove_file(target)?;
    }
    std::os::unix::fs::symlink(points_to, target)
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> std::io::Result<()> {
    fs::copy(link, target).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provisioner::{ProvisionError, ProvisionFailure};
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Records calls and builds a minimal environment tree.
    #[derive(Default)]
    struct FakeProvisioner {
        fail_create: bool,
        fail_install: bool,
        skip_mkdir: bool,
        created: RefCell<Vec<(PathBuf, Option<String>)>>,
        installed: RefCell<Vec<(PathBuf, Vec<String>)>>,
    }

    fn failure(command: &str) -> ProvisionError {
        ProvisionError {
            command: command.to_string(),
            kind: ProvisionFailure::Spawn(std::io::Error::new(
                std::io::ErrorKind::Other,
                "boom",
            )),
        }
    }

    impl Provisioner for FakeProvisioner {
        fn create(&self, target: &Path, python: Option<&str>) -> Result<(), ProvisionError> {
            self.created
                .borrow_mut()
                .push((target.to_path_buf(), python.map(str::to_string)));
            if self.fail_create {
                return Err(failure("uv venv"));
            }
            if !self.skip_mkdir {
                fs::create_dir_all(target.join("bin")).unwrap();
                fs::create_dir_all(target.join("lib/python3.11/site-packages")).unwrap();
            }
            Ok(())
        }

        fn install(&self, env: &Path, packages: &[String]) -> Result<(), ProvisionError> {
            self.installed
                .borrow_mut()
                .push((env.to_path_buf(), packages.to_vec()));
            if self.fail_install {
                return Err(failure("uv pip install"));
            }
            Ok(())
        }
    }

    fn setup() -> (TempDir, Registry) {
        let temp = TempDir::new().unwrap();
        let registry = Registry::new(temp.path().join("uve"), None);
        (temp, registry)
    }

    fn pip() -> Vec<String> {
        vec!["pip".to_string()]
    }

    #[test]
    fn test_create_then_list() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();

        let created = registry
            .create(&provisioner, "web", Some("3.11"), Some(pip().as_slice()))
            .unwrap();
        assert!(created.warnings.is_empty());
        assert!(created.environment.path.is_dir());
        assert_eq!(created.environment.path, registry.home().join("web"));

        let names: Vec<String> = registry.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["web"]);

        let calls = provisioner.created.borrow();
        assert_eq!(calls[0].1.as_deref(), Some("3.11"));
        assert_eq!(provisioner.installed.borrow().len(), 1);
    }

    #[test]
    fn test_create_twice_fails_and_keeps_original() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();
        registry.create(&provisioner, "web", None, None).unwrap();
        let marker = registry.home().join("web/marker");
        fs::write(&marker, "keep").unwrap();

        let err = registry.create(&provisioner, "web", None, None).unwrap_err();
        assert!(matches!(err, UveError::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(&marker).unwrap(), "keep");
        assert_eq!(provisioner.created.borrow().len(), 1);
    }

    #[test]
    fn test_create_skip_bootstrap() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();
        registry.create(&provisioner, "web", None, None).unwrap();
        registry.create(&provisioner, "api", None, Some(&[][..])).unwrap();
        assert!(provisioner.installed.borrow().is_empty());
    }

    #[test]
    fn test_create_bootstrap_failure_is_warning() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner {
            fail_install: true,
            ..Default::default()
        };

        let created = registry
            .create(&provisioner, "web", None, Some(pip().as_slice()))
            .unwrap();
        assert_eq!(created.warnings.len(), 1);
        assert!(matches!(created.warnings[0], Warning::Bootstrap { .. }));
        assert!(created.environment.exists());
    }

    #[test]
    fn test_create_provisioning_failure_is_fatal() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner {
            fail_create: true,
            ..Default::default()
        };

        let err = registry
            .create(&provisioner, "web", None, Some(pip().as_slice()))
            .unwrap_err();
        assert!(matches!(err, UveError::Provisioning { .. }));
        assert!(provisioner.installed.borrow().is_empty());
    }

    #[test]
    fn test_create_missing_directory_after_provisioning() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner {
            skip_mkdir: true,
            ..Default::default()
        };
        let err = registry.create(&provisioner, "web", None, None).unwrap_err();
        assert!(matches!(err, UveError::Io { .. }));
    }

    #[test]
    fn test_create_rejects_traversal_name() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();
        let err = registry
            .create(&provisioner, "../outside", None, None)
            .unwrap_err();
        assert!(matches!(err, UveError::InvalidName { .. }));
        assert!(provisioner.created.borrow().is_empty());
    }

    #[test]
    fn test_list_missing_home_is_empty() {
        let (_temp, registry) = setup();
        assert!(registry.list().unwrap().is_empty());
        assert!(!registry.home().exists());
    }

    #[test]
    fn test_list_skips_files_and_sorts() {
        let (_temp, registry) = setup();
        fs::create_dir_all(registry.home().join("zeta")).unwrap();
        fs::create_dir_all(registry.home().join("alpha")).unwrap();
        fs::write(registry.home().join("notes.txt"), "").unwrap();

        let names: Vec<String> = registry.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_marks_active() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("uve");
        fs::create_dir_all(home.join("web")).unwrap();
        fs::create_dir_all(home.join("api")).unwrap();
        let active = home.join("web").display().to_string();
        let registry = Registry::new(&home, Some(active));

        let envs = registry.list().unwrap();
        assert!(!envs[0].active);
        assert!(envs[1].active);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_list_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (_temp, registry) = setup();
        fs::create_dir_all(registry.home().join("web")).unwrap();
        fs::create_dir_all(registry.home().join(OsStr::from_bytes(b"bad\xff"))).unwrap();

        let names: Vec<String> = registry.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["web"]);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let (_temp, registry) = setup();
        fs::create_dir_all(registry.home()).unwrap();
        let err = registry.delete("ghost").unwrap_err();
        assert!(matches!(err, UveError::NotFound { .. }));
    }

    #[test]
    fn test_delete_removes_tree() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();
        registry.create(&provisioner, "web", None, None).unwrap();

        let deleted = registry.delete("web").unwrap();
        assert!(!deleted.path.exists());
        assert!(registry.home().exists());
    }

    #[test]
    fn test_delete_active_is_rejected() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("uve");
        fs::create_dir_all(home.join("web")).unwrap();
        let registry = Registry::new(&home, Some(home.join("web").display().to_string()));

        let err = registry.delete("web").unwrap_err();
        assert!(matches!(err, UveError::ActiveEnvironment { .. }));
        assert!(home.join("web").exists());
    }

    #[test]
    fn test_delete_with_other_active_proceeds() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("uve");
        fs::create_dir_all(home.join("web")).unwrap();
        fs::create_dir_all(home.join("api")).unwrap();
        let registry = Registry::new(&home, Some(home.join("api").display().to_string()));

        registry.delete("web").unwrap();
        assert!(!home.join("web").exists());
    }

    #[test]
    fn test_delete_parent_traversal_is_unsafe() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("uve");
        fs::create_dir_all(&home).unwrap();
        let victim = temp.path().join("victim");
        fs::create_dir_all(&victim).unwrap();
        let registry = Registry::new(&home, None);

        let err = registry.delete("../victim").unwrap_err();
        assert!(matches!(err, UveError::UnsafePath { .. }));
        assert!(victim.exists());
    }

    #[test]
    fn test_delete_home_itself_is_unsafe() {
        let (_temp, registry) = setup();
        fs::create_dir_all(registry.home()).unwrap();
        let err = registry.delete(".").unwrap_err();
        assert!(matches!(err, UveError::UnsafePath { .. }));
        assert!(registry.home().exists());
    }

    #[test]
    fn test_delete_nested_path_is_unsafe() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("uve");
        fs::create_dir_all(home.join("web").join("bin")).unwrap();
        fs::write(home.join("web").join("bin").join("python"), "").unwrap();
        let registry = Registry::new(&home, Some(home.join("web").display().to_string()));

        let err = registry.delete("web/bin").unwrap_err();
        assert!(matches!(err, UveError::UnsafePath { .. }));
        assert!(home.join("web").join("bin").join("python").exists());

        let err = registry.get("web/bin").unwrap_err();
        assert!(matches!(err, UveError::UnsafePath { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_symlink_escape_is_unsafe() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("uve");
        fs::create_dir_all(&home).unwrap();
        let victim = temp.path().join("victim");
        fs::create_dir_all(&victim).unwrap();
        fs::write(victim.join("data"), "precious").unwrap();
        std::os::unix::fs::symlink(&victim, home.join("link")).unwrap();
        let registry = Registry::new(&home, None);

        let err = registry.delete("link").unwrap_err();
        assert!(matches!(err, UveError::UnsafePath { .. }));
        assert!(victim.join("data").exists());
        assert!(home.join("link").symlink_metadata().is_ok());
    }

    #[test]
    fn test_get_missing_and_present() {
        let (_temp, registry) = setup();
        fs::create_dir_all(registry.home().join("web")).unwrap();
        assert!(registry.get("web").is_ok());
        assert!(matches!(
            registry.get("api").unwrap_err(),
            UveError::NotFound { .. }
        ));
    }

    #[test]
    fn test_clone_copies_packages() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();
        registry.create(&provisioner, "web", Some("3.11"), None).unwrap();
        let site = registry.home().join("web/lib/python3.11/site-packages");
        fs::create_dir_all(site.join("requests")).unwrap();
        fs::write(site.join("requests/__init__.py"), "").unwrap();
        fs::write(site.join("six.py"), "").unwrap();

        let cloned = registry.clone_env(&provisioner, "web", "web2").unwrap();
        assert!(cloned.warnings.is_empty(), "{:?}", cloned.warnings);
        assert_eq!(cloned.copied_files, 2);
        let dest_site = registry.home().join("web2/lib/python3.11/site-packages");
        assert!(dest_site.join("requests/__init__.py").exists());
        assert!(dest_site.join("six.py").exists());

        let calls = provisioner.created.borrow();
        let pinned = calls[1].1.clone().unwrap();
        assert!(pinned.contains("web"));
        assert!(pinned.ends_with("python") || pinned.ends_with("python.exe"));
    }

    #[test]
    fn test_clone_missing_source() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();
        let err = registry.clone_env(&provisioner, "ghost", "copy").unwrap_err();
        assert!(matches!(err, UveError::NotFound { .. }));
        assert!(provisioner.created.borrow().is_empty());
    }

    #[test]
    fn test_clone_existing_destination() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();
        registry.create(&provisioner, "web", None, None).unwrap();
        registry.create(&provisioner, "api", None, None).unwrap();
        let err = registry.clone_env(&provisioner, "web", "api").unwrap_err();
        assert!(matches!(err, UveError::AlreadyExists { .. }));
    }

    #[test]
    fn test_clone_without_package_dir_warns() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();
        fs::create_dir_all(registry.home().join("bare/bin")).unwrap();

        let cloned = registry.clone_env(&provisioner, "bare", "copy").unwrap();
        assert_eq!(cloned.copied_files, 0);
        assert!(matches!(
            cloned.warnings.as_slice(),
            [Warning::NoPackageDirectory { .. }]
        ));
        assert!(cloned.environment.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_clone_with_ambiguous_package_dirs_warns() {
        let (_temp, registry) = setup();
        let provisioner = FakeProvisioner::default();
        let web = registry.home().join("web");
        fs::create_dir_all(web.join("lib/python3.11/site-packages")).unwrap();
        fs::create_dir_all(web.join("lib/python3.12/site-packages")).unwrap();

        let cloned = registry.clone_env(&provisioner, "web", "copy").unwrap();
        assert_eq!(cloned.copied_files, 0);
        match cloned.warnings.as_slice() {
            [Warning::AmbiguousPackageDirectory { candidates, .. }] => {
                assert_eq!(candidates.len(), 2)
            }
            other => panic!("unexpected warnings: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_package_dirs_pattern() {
        let temp = TempDir::new().unwrap();
        let env = temp.path();
        fs::create_dir_all(env.join("lib/python3.11/site-packages")).unwrap();
        fs::create_dir_all(env.join("lib/python3.13t/site-packages")).unwrap();
        fs::create_dir_all(env.join("lib/pythonista/site-packages")).unwrap();
        fs::create_dir_all(env.join("lib/python3.10")).unwrap();

        assert_eq!(
            package_dirs(env),
            vec![
                PathBuf::from("lib/python3.11/site-packages"),
                PathBuf::from("lib/python3.13t/site-packages"),
            ]
        );
    }
}
