//! 目录遍历服务 - 业务能力层
//!
//! 只负责"找出输入目录下的所有文件"，不关心文件内容

use crate::error::{AppError, AppResult};
use futures::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 目录遍历服务
///
/// - 深度优先，同一目录内按列目录返回的顺序依次处理
/// - 子目录的结果在该目录项的位置展开，处理完才进入下一项
/// - 不进入符号链接；指向普通文件的链接按文件处理
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// 递归列出 `root` 下的所有文件
    ///
    /// 任何目录无法列出都返回 `AppError::Traversal`
    pub async fn walk(&self, root: &Path) -> AppResult<Vec<PathBuf>> {
        let files = walk_dir(root.to_path_buf()).await?;
        debug!("遍历完成: {} 下共 {} 个文件", root.display(), files.len());
        Ok(files)
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}

fn walk_dir(dir: PathBuf) -> BoxFuture<'static, AppResult<Vec<PathBuf>>> {
    async move {
        let traversal = |source| AppError::Traversal {
            path: dir.clone(),
            source,
        };

        let mut results = Vec::new();
        let mut entries = fs::read_dir(&dir).await.map_err(traversal)?;

        while let Some(entry) = entries.next_entry().await.map_err(traversal)? {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(traversal)?;

            if file_type.is_dir() {
                results.extend(walk_dir(path).await?);
            } else if file_type.is_symlink() {
                match fs::metadata(&path).await {
                    Ok(meta) if meta.is_file() => results.push(path),
                    Ok(_) => debug!("跳过符号链接: {}", path.display()),
                    Err(e) => debug!("跳过失效的符号链接 {}: {}", path.display(), e),
                }
            } else {
                results.push(path);
            }
        }

        Ok(results)
    }
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn empty_directory_yields_no_files() {
        let dir = TempDir::new().unwrap();

        let files = TreeWalker::new().walk(dir.path()).await.unwrap();

        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn finds_files_at_every_depth() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("a/b/c/d/e");
        std_fs::create_dir_all(&deep).unwrap();
        std_fs::write(dir.path().join("top.yml"), "x: {}").unwrap();
        std_fs::write(deep.join("deep.yml"), "x: {}").unwrap();
        std_fs::create_dir(dir.path().join("empty")).unwrap();

        let mut files = TreeWalker::new().walk(dir.path()).await.unwrap();
        files.sort();

        assert_eq!(files, vec![deep.join("deep.yml"), dir.path().join("top.yml")]);
    }

    #[tokio::test]
    async fn subdirectory_results_stay_contiguous() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        std_fs::create_dir(&sub).unwrap();
        std_fs::write(sub.join("one.yml"), "").unwrap();
        std_fs::write(sub.join("two.yml"), "").unwrap();
        std_fs::write(dir.path().join("root.yml"), "").unwrap();

        let files = TreeWalker::new().walk(dir.path()).await.unwrap();

        assert_eq!(files.len(), 3);
        let positions: Vec<usize> = files
            .iter()
            .enumerate()
            .filter(|(_, p)| p.starts_with(&sub))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1], positions[0] + 1);
    }

    #[tokio::test]
    async fn missing_root_is_a_traversal_error() {
        let dir = TempDir::new().unwrap();

        let err = TreeWalker::new()
            .walk(&dir.path().join("nope"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Traversal { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unreadable_subdirectory_is_a_traversal_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        std_fs::create_dir(&locked).unwrap();
        std_fs::write(locked.join("q.yml"), "").unwrap();
        std_fs::write(dir.path().join("top.yml"), "").unwrap();
        std_fs::set_permissions(&locked, std_fs::Permissions::from_mode(0o000)).unwrap();

        // root 用户不受权限位限制，此时无法构造该场景
        if std_fs::read_dir(&locked).is_ok() {
            std_fs::set_permissions(&locked, std_fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = TreeWalker::new().walk(dir.path()).await;
        std_fs::set_permissions(&locked, std_fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(AppError::Traversal { path, .. }) => assert_eq!(path, locked),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn does_not_descend_into_linked_directories() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real");
        std_fs::create_dir(&real).unwrap();
        std_fs::write(real.join("q.yml"), "").unwrap();
        std::os::unix::fs::symlink(dir.path(), real.join("loop")).unwrap();
        std::os::unix::fs::symlink(real.join("q.yml"), dir.path().join("link.yml")).unwrap();

        let mut files = TreeWalker::new().walk(dir.path()).await.unwrap();
        files.sort();

        assert_eq!(files, vec![dir.path().join("link.yml"), real.join("q.yml")]);
    }
}
