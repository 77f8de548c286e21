use std::fs;
use tempfile::TempDir;

/// Build a small Ansible-style project under `<tmp>/sample-app`.
///
/// ```text
/// sample-app/
///   playbook.yml
///   requirements.txt
///   roles/nginx/tasks/main.yml
///   templates/nginx.conf.j2
/// ```
pub(crate) fn create_sample_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("sample-app");

    fs::create_dir_all(root.join("roles/nginx/tasks")).unwrap();
    fs::create_dir_all(root.join("templates")).unwrap();
    fs::write(root.join("playbook.yml"), "- hosts: all\n  roles: [nginx]\n").unwrap();
    fs::write(root.join("requirements.txt"), "ansible\n").unwrap();
    fs::write(
        root.join("roles/nginx/tasks/main.yml"),
        "- name: install nginx\n  apt: name=nginx\n",
    )
    .unwrap();
    fs::write(root.join("templates/nginx.conf.j2"), "server {}\n").unwrap();

    temp_dir
}

/// Write `content` as the prompt template in a fresh temp dir.
pub(crate) fn write_template(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("prompt_template.txt");
    fs::write(&path, content).unwrap();
    path
}
